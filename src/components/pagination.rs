// Pagination controls
use leptos::*;

use crate::constants::ITEMS_PER_PAGE_OPTIONS;
use crate::types::api::PaginationMeta;

fn record_word(count: u64) -> &'static str {
    if count == 1 {
        "registro"
    } else {
        "registros"
    }
}

/// Page-size selector; "Mostrar N de M registros" on desktop, bare select
/// on mobile.
#[component]
pub fn ChangePaginationItems(
    #[prop(into)] meta: Signal<Option<PaginationMeta>>,
    #[prop(into)] items_per_page: Signal<u32>,
    #[prop(into)] on_items_per_page_change: Callback<u32>,
    #[prop(optional)] is_mobile: bool,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            {(!is_mobile).then(|| view! {
                <span class="whitespace-nowrap text-sm text-gray-700">"Mostrar"</span>
            })}
            <select
                class="rounded-lg border border-gray-300 bg-white px-3 py-1.5 text-sm focus:border-indigo-500 focus:outline-none focus:ring-1 focus:ring-indigo-500 disabled:cursor-not-allowed disabled:opacity-50"
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                        on_items_per_page_change.call(limit);
                    }
                }
            >
                {ITEMS_PER_PAGE_OPTIONS
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option
                                value=option.to_string()
                                selected=move || items_per_page.get() == option
                            >
                                {option.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            {(!is_mobile).then(|| view! {
                <span class="whitespace-nowrap text-sm text-gray-700">
                    {move || {
                        meta.get()
                            .map(|m| format!("de {} {}", m.total_items, record_word(m.total_items)))
                            .unwrap_or_default()
                    }}
                </span>
            })}
        </div>
    }
}

#[component]
pub fn PaginationInfo(#[prop(into)] meta: Signal<Option<PaginationMeta>>) -> impl IntoView {
    view! {
        <div class="text-sm text-gray-700">
            {move || {
                meta.get()
                    .map(|m| {
                        format!(
                            "página {} de {} ({} {})",
                            m.current_page,
                            m.total_pages,
                            m.total_items,
                            record_word(m.total_items),
                        )
                    })
                    .unwrap_or_default()
            }}
        </div>
    }
}

/// Previous/next controls gated by the server metadata, plus the
/// page-size selector. Renders a desktop and a mobile variant.
#[component]
pub fn Pagination(
    #[prop(into)] meta: Signal<Option<PaginationMeta>>,
    #[prop(into)] on_previous_page: Callback<()>,
    #[prop(into)] on_next_page: Callback<()>,
    #[prop(into)] items_per_page: Signal<u32>,
    #[prop(into)] on_items_per_page_change: Callback<u32>,
    #[prop(into, optional)] is_loading: MaybeSignal<bool>,
    #[prop(optional)] is_mobile: bool,
) -> impl IntoView {
    let prev_disabled = move || {
        meta.get().map(|m| !m.has_previous_page).unwrap_or(true) || is_loading.get()
    };
    let next_disabled =
        move || meta.get().map(|m| !m.has_next_page).unwrap_or(true) || is_loading.get();

    if is_mobile {
        view! {
            <div class="flex items-center justify-between gap-3 border-t border-gray-200 bg-gray-50 px-4 py-3 md:hidden">
                <ChangePaginationItems
                    meta=meta
                    items_per_page=items_per_page
                    on_items_per_page_change=on_items_per_page_change
                    is_mobile=true
                    disabled=Signal::derive(move || is_loading.get())
                />
                <div class="text-xs text-gray-600">
                    {move || {
                        meta.get()
                            .map(|m| format!("Pág. {}/{} ({})", m.current_page, m.total_pages, m.total_items))
                            .unwrap_or_default()
                    }}
                </div>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="rounded-lg border border-gray-300 bg-white px-3 py-1.5 text-sm disabled:cursor-not-allowed disabled:opacity-50"
                        aria-label="Página anterior"
                        disabled=prev_disabled
                        on:click=move |_| on_previous_page.call(())
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        class="rounded-lg border border-gray-300 bg-white px-3 py-1.5 text-sm disabled:cursor-not-allowed disabled:opacity-50"
                        aria-label="Página siguiente"
                        disabled=next_disabled
                        on:click=move |_| on_next_page.call(())
                    >
                        "›"
                    </button>
                </div>
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="hidden items-center justify-between border-t border-gray-200 bg-gray-50 px-4 py-3 md:flex">
                <div class="flex items-center gap-6">
                    <ChangePaginationItems
                        meta=meta
                        items_per_page=items_per_page
                        on_items_per_page_change=on_items_per_page_change
                        disabled=Signal::derive(move || is_loading.get())
                    />
                    <PaginationInfo meta=meta/>
                </div>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="rounded-lg border border-gray-300 bg-white px-3 py-1.5 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:cursor-not-allowed disabled:opacity-50"
                        disabled=prev_disabled
                        on:click=move |_| on_previous_page.call(())
                    >
                        "Anterior"
                    </button>
                    <button
                        type="button"
                        class="rounded-lg border border-gray-300 bg-white px-3 py-1.5 text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:cursor-not-allowed disabled:opacity-50"
                        disabled=next_disabled
                        on:click=move |_| on_next_page.call(())
                    >
                        "Siguiente"
                    </button>
                </div>
            </div>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_word_is_singular_only_for_one() {
        assert_eq!(record_word(0), "registros");
        assert_eq!(record_word(1), "registro");
        assert_eq!(record_word(2), "registros");
    }
}
