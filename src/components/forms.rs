// Form components
use leptos::*;

/// Labelled text input bound to an `RwSignal<String>`, with optional
/// inline server-side validation error.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    let id = name.clone();
    view! {
        <div class="mb-4">
            <label for=id.clone() class="block text-sm font-medium text-gray-700">
                {label}
            </label>
            <input
                id=id
                name=name
                type=input_type
                required=required
                placeholder=placeholder
                class="mt-1 block w-full rounded-lg border border-gray-300 px-3 py-2 text-sm text-gray-900 placeholder-gray-400 focus:border-indigo-500 focus:outline-none focus:ring-1 focus:ring-indigo-500"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="mt-1 text-sm text-red-600">{message}</p> })
            }}
        </div>
    }
}

/// Labelled select over a fixed option list.
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] value: RwSignal<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    let id = name.clone();
    view! {
        <div class="mb-4">
            <label for=id.clone() class="block text-sm font-medium text-gray-700">
                {label}
            </label>
            <select
                id=id
                name=name
                class="mt-1 block w-full rounded-lg border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:border-indigo-500 focus:outline-none focus:ring-1 focus:ring-indigo-500"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == selected_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Search box with the magnifier affordance used atop listings.
#[component]
pub fn SearchInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="relative w-full md:max-w-sm">
            <input
                type="search"
                placeholder=placeholder
                class="w-full rounded-lg border border-gray-300 py-2 pl-4 pr-3 text-sm text-gray-900 placeholder-gray-400 focus:border-indigo-500 focus:outline-none focus:ring-1 focus:ring-indigo-500"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
