// Table components
use leptos::*;

/// Which body the table shows. Error wins over everything so a failed
/// fetch is never masked by a stale empty or loading presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Error,
    Empty,
    Skeleton,
    Rows,
}

pub fn body_state(
    show_error: bool,
    has_error_node: bool,
    show_empty: bool,
    has_empty_node: bool,
    is_loading: bool,
) -> BodyState {
    if show_error && has_error_node {
        BodyState::Error
    } else if show_empty && !is_loading && has_empty_node {
        BodyState::Empty
    } else if is_loading {
        BodyState::Skeleton
    } else {
        BodyState::Rows
    }
}

#[component]
pub fn Table(#[prop(optional)] hide_mobile: bool, children: Children) -> impl IntoView {
    let table_class = if hide_mobile {
        "w-full caption-bottom text-sm hidden md:table"
    } else {
        "w-full caption-bottom text-sm"
    };
    view! {
        <div class="w-full overflow-auto">
            <table class=table_class>
                {children()}
            </table>
        </div>
    }
}

#[component]
pub fn TableHeader(children: Children) -> impl IntoView {
    view! {
        <thead class="border-b border-gray-200 bg-gray-50">
            <tr>{children()}</tr>
        </thead>
    }
}

#[component]
pub fn TableHead(
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let clickable = on_click.is_some();
    view! {
        <th
            class="h-12 px-4 text-left align-middle font-semibold text-gray-700"
            class:cursor-pointer=clickable
            class:select-none=clickable
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.call(());
                }
            }
        >
            {children()}
        </th>
    }
}

#[component]
pub fn TableRow(
    #[prop(optional)] clickable: bool,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let row_class = if clickable {
        "border-b border-gray-200 transition-colors cursor-pointer hover:bg-gray-50"
    } else {
        "border-b border-gray-200 transition-colors"
    };
    view! {
        <tr
            class=row_class
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.call(());
                }
            }
        >
            {children()}
        </tr>
    }
}

#[component]
pub fn TableCell(children: Children) -> impl IntoView {
    view! { <td class="p-4 align-middle text-gray-900">{children()}</td> }
}

/// Table body that owns the loading/empty/error sub-states and only
/// delegates to `children` for the populated case.
#[component]
pub fn TableBody(
    #[prop(into, optional)] is_loading: MaybeSignal<bool>,
    #[prop(into, default = MaybeSignal::Static(10))] skeleton_rows: MaybeSignal<usize>,
    #[prop(default = 1)] column_count: usize,
    #[prop(optional, into)] empty_state: Option<ViewFn>,
    #[prop(optional, into)] error_state: Option<ViewFn>,
    #[prop(into, optional)] show_empty_state: MaybeSignal<bool>,
    #[prop(into, optional)] show_error_state: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <tbody class="divide-y divide-gray-200">
            {move || {
                let state = body_state(
                    show_error_state.get(),
                    error_state.is_some(),
                    show_empty_state.get(),
                    empty_state.is_some(),
                    is_loading.get(),
                );
                match state {
                    BodyState::Error => {
                        let node = error_state.clone().map(|v| v.run());
                        view! {
                            <tr>
                                <td colspan=column_count class="p-0">{node}</td>
                            </tr>
                        }
                        .into_view()
                    }
                    BodyState::Empty => {
                        let node = empty_state.clone().map(|v| v.run());
                        view! {
                            <tr>
                                <td colspan=column_count class="p-0">{node}</td>
                            </tr>
                        }
                        .into_view()
                    }
                    BodyState::Skeleton => (0..skeleton_rows.get())
                        .map(|_| {
                            view! {
                                <tr>
                                    <td colspan=column_count class="p-0 pb-1">
                                        <div class="h-16 w-full animate-pulse rounded bg-gray-200"></div>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view(),
                    BodyState::Rows => children().into_view(),
                }
            }}
        </tbody>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_takes_priority_over_everything() {
        assert_eq!(body_state(true, true, true, true, true), BodyState::Error);
        assert_eq!(body_state(true, true, false, false, false), BodyState::Error);
    }

    #[test]
    fn error_flag_without_node_falls_through() {
        assert_eq!(body_state(true, false, false, false, true), BodyState::Skeleton);
        assert_eq!(body_state(true, false, false, false, false), BodyState::Rows);
    }

    #[test]
    fn loading_masks_empty_state() {
        assert_eq!(body_state(false, false, true, true, true), BodyState::Skeleton);
        assert_eq!(body_state(false, false, true, true, false), BodyState::Empty);
    }

    #[test]
    fn rows_render_when_nothing_else_applies() {
        assert_eq!(body_state(false, false, false, false, false), BodyState::Rows);
    }
}
