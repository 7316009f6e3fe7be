// Application shell
use leptos::*;
use leptos_router::use_navigate;

use crate::auth::{self, use_session};
use crate::constants::STORAGE_KEY_SIDEBAR;
use crate::utils::user_initials;

/// Sidebar open/closed state, persisted so the preference survives a
/// reload.
#[derive(Clone, Copy)]
pub struct SidebarState(pub RwSignal<bool>);

pub fn provide_sidebar() -> SidebarState {
    let open = restore_sidebar_open();
    let state = SidebarState(create_rw_signal(open));
    provide_context(state);
    state
}

pub fn use_sidebar() -> SidebarState {
    use_context::<SidebarState>().expect("SidebarState must be provided at the app root")
}

fn restore_sidebar_open() -> bool {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY_SIDEBAR).ok().flatten())
        .map(|raw| raw != "false")
        .unwrap_or(true)
}

fn persist_sidebar_open(open: bool) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY_SIDEBAR, if open { "true" } else { "false" });
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let sidebar = use_sidebar();
    view! {
        <div class="min-h-screen bg-gray-50">
            <Sidebar/>
            <div class=move || if sidebar.0.get() { "lg:pl-64" } else { "" }>
                <Topbar/>
                <main class="py-6">
                    <div class="px-4 sm:px-6 lg:px-8">{children()}</div>
                </main>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let sidebar = use_sidebar();
    view! {
        <aside
            class="fixed inset-y-0 left-0 z-30 w-64 border-r border-gray-200 bg-white"
            style:display=move || if sidebar.0.get() { "block" } else { "none" }
        >
            <div class="flex h-16 items-center border-b border-gray-200 px-6">
                <span class="text-lg font-bold text-indigo-600">"Fervor Juvenil"</span>
            </div>
            <nav class="space-y-1 px-3 py-4">
                <a
                    href="/users"
                    class="block rounded-lg px-3 py-2 text-sm font-medium text-gray-700 hover:bg-indigo-50 hover:text-indigo-700"
                >
                    "Usuarios"
                </a>
                <a
                    href="/profile"
                    class="block rounded-lg px-3 py-2 text-sm font-medium text-gray-700 hover:bg-indigo-50 hover:text-indigo-700"
                >
                    "Mi Perfil"
                </a>
            </nav>
        </aside>
    }
}

#[component]
fn Topbar() -> impl IntoView {
    let sidebar = use_sidebar();
    let session = use_session();
    let navigate = use_navigate();

    let toggle_sidebar = move |_| {
        sidebar.0.update(|open| *open = !*open);
        persist_sidebar_open(sidebar.0.get_untracked());
    };
    let on_logout = move |_| {
        auth::logout(session);
        navigate("/login", Default::default());
    };

    view! {
        <header class="flex h-16 items-center justify-between border-b border-gray-200 bg-white px-4 sm:px-6 lg:px-8">
            <button
                type="button"
                class="rounded-lg p-2 text-gray-500 hover:bg-gray-100"
                aria-label="Alternar menú"
                on:click=toggle_sidebar
            >
                "☰"
            </button>
            <div class="flex items-center gap-3">
                <div class="flex h-9 w-9 items-center justify-center rounded-full bg-indigo-100 text-sm font-semibold text-indigo-600">
                    {move || {
                        session
                            .get()
                            .user
                            .map(|user| user_initials(&user))
                            .unwrap_or_default()
                    }}
                </div>
                <button
                    type="button"
                    class="text-sm font-medium text-gray-600 hover:text-gray-900"
                    on:click=on_logout
                >
                    "Salir"
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: String,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h1 class="text-3xl font-bold text-gray-900">{title}</h1>
            {(!description.is_empty())
                .then(|| view! { <p class="mt-2 text-gray-600">{description}</p> })}
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into, optional)] description: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <div class="mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-gray-100 text-2xl text-gray-400">
                "∅"
            </div>
            <h3 class="mb-2 text-lg font-semibold text-gray-900">{title}</h3>
            {(!description.is_empty())
                .then(|| view! { <p class="max-w-md text-gray-600">{description}</p> })}
        </div>
    }
}

/// Persistent failure panel with a retry action bound to the failed
/// fetch.
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-center">
            <div class="mb-4 flex h-16 w-16 items-center justify-center rounded-full bg-red-100 text-2xl text-red-600">
                "!"
            </div>
            <h3 class="mb-2 text-lg font-semibold text-gray-900">"Algo salió mal"</h3>
            <p class="mb-6 max-w-md text-gray-600">{message}</p>
            <button
                type="button"
                class="rounded-lg bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700"
                on:click=move |_| on_retry.call(())
            >
                "Reintentar"
            </button>
        </div>
    }
}
