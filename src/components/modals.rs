// Modal components
use leptos::*;

/// Centered overlay modal. Kept mounted; visibility toggles via `show`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] show: RwSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center bg-black/40 p-4"
            style:display=move || if show.get() { "flex" } else { "none" }
            on:click=move |_| show.set(false)
        >
            <div
                class="max-h-[90vh] w-full max-w-lg overflow-y-auto rounded-lg bg-white shadow-xl"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between border-b border-gray-200 px-4 py-3">
                    <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                    <button
                        type="button"
                        class="rounded-lg p-1 text-gray-400 hover:bg-gray-100 hover:text-gray-600"
                        aria-label="Cerrar"
                        on:click=move |_| show.set(false)
                    >
                        "✕"
                    </button>
                </div>
                <div class="px-4 py-4">{children()}</div>
            </div>
        </div>
    }
}

/// Right-hand side panel used for row detail views.
#[component]
pub fn SidePanel(
    #[prop(into)] title: String,
    #[prop(into)] show: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-40 bg-black/40"
            style:display=move || if show.get() { "block" } else { "none" }
            on:click=move |_| show.set(false)
        >
            <aside
                class="absolute inset-y-0 right-0 flex w-full max-w-md flex-col bg-white shadow-xl"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="flex items-center justify-between border-b border-gray-200 px-4 py-3">
                    <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                    <button
                        type="button"
                        class="rounded-lg p-1 text-gray-400 hover:bg-gray-100 hover:text-gray-600"
                        aria-label="Cerrar"
                        on:click=move |_| show.set(false)
                    >
                        "✕"
                    </button>
                </div>
                <div class="flex-1 overflow-y-auto px-4 py-4">{children()}</div>
            </aside>
        </div>
    }
}
