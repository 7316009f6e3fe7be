// Page components
use leptos::*;
use leptos_router::use_navigate;

use crate::auth::use_session;

mod auth;
mod profile;
mod users;

pub use auth::LoginPage;
pub use profile::{ProfilePage, ProfileSections};
pub use users::UsersPage;

/// Landing route: bounces to the listing or to login depending on the
/// restored session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    create_effect(move |_| {
        if session.get().is_authenticated() {
            navigate("/users", Default::default());
        } else {
            navigate("/login", Default::default());
        }
    });

    view! { <div class="min-h-screen bg-gray-50"></div> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-gray-50 px-4 text-center">
            <h1 class="text-6xl font-extrabold text-indigo-600">"404"</h1>
            <p class="mt-4 text-lg text-gray-700">"La página que buscas no existe."</p>
            <a
                href="/"
                class="mt-6 rounded-lg bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700"
            >
                "Volver al inicio"
            </a>
        </div>
    }
}
