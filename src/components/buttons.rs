// Button components
use leptos::*;

#[component]
pub fn PrimaryButton(
    #[prop(into)] text: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(default = "button")] button_type: &'static str,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class="inline-flex items-center justify-center rounded-lg bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50"
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.call(());
                }
            }
        >
            {text}
        </button>
    }
}

#[component]
pub fn OutlineButton(
    #[prop(into)] text: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="inline-flex items-center justify-center rounded-lg border border-gray-300 bg-white px-3 py-1.5 text-sm font-medium text-gray-700 hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-indigo-500 disabled:cursor-not-allowed disabled:opacity-50"
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.call(());
                }
            }
        >
            {text}
        </button>
    }
}

/// Toggle for the active sort direction; highlighted while a sort is
/// applied.
#[component]
pub fn SortButton(
    #[prop(into)] on_click: Callback<()>,
    #[prop(into, optional)] active: MaybeSignal<bool>,
    #[prop(into, optional)] descending: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="inline-flex items-center justify-center rounded-lg border border-gray-300 bg-white px-3 py-1.5 text-sm font-medium hover:bg-gray-50 focus:outline-none"
            class:text-indigo-600=move || active.get()
            class:text-gray-600=move || !active.get()
            aria-label="Ordenar"
            on:click=move |_| on_click.call(())
        >
            {move || if descending.get() { "↓" } else { "↑" }}
        </button>
    }
}
