// Fervor Juvenil admin UI - client-side Leptos application
pub mod api;
pub mod auth;
pub mod components;
pub mod constants;
pub mod hooks;
pub mod pages;
pub mod types;
pub mod utils;

use leptos::*;
use leptos_meta::{provide_meta_context, Html, Title};
use leptos_router::{Route, Router, Routes};

use crate::api::{provide_api, ApiClient};
use crate::auth::RequireAuth;
use crate::components::layout::{provide_sidebar, Layout};
use crate::components::notifications::{provide_toasts, ToastContainer};
use crate::pages::{HomePage, LoginPage, NotFoundPage, ProfilePage, UsersPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_api(ApiClient::new(constants::api_base_url()));
    auth::provide_session();
    provide_toasts();
    provide_sidebar();

    view! {
        <Html lang="es"/>
        <Title text="Fervor Juvenil"/>
        <Router>
            <ToastContainer/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/login" view=LoginPage/>
                <Route
                    path="/users"
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <UsersPage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path="/profile"
                    view=|| {
                        view! {
                            <RequireAuth>
                                <Layout>
                                    <ProfilePage/>
                                </Layout>
                            </RequireAuth>
                        }
                    }
                />
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
