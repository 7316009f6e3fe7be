// Login page
use std::collections::HashMap;

use leptos::*;
use leptos_router::use_navigate;

use crate::api::{auth::LoginPayload, use_api};
use crate::auth::{self, use_session};
use crate::components::forms::TextInput;
use crate::components::notifications::use_toasts;

fn validate_login(email: &str, password: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if email.trim().is_empty() {
        errors.insert("email".to_string(), "Este campo es obligatorio".to_string());
    } else if !email.contains('@') {
        errors.insert("email".to_string(), "Ingrese un correo válido".to_string());
    }
    if password.is_empty() {
        errors.insert(
            "password".to_string(),
            "Este campo es obligatorio".to_string(),
        );
    }
    errors
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();

    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let field_errors = create_rw_signal(HashMap::<String, String>::new());
    let general_error = create_rw_signal(None::<String>);

    // Already signed in? Straight to the listing.
    let redirect = navigate.clone();
    create_effect(move |_| {
        if session.get().is_authenticated() {
            redirect("/users", Default::default());
        }
    });

    let login = create_action(move |payload: &LoginPayload| {
        let api = api.clone();
        let payload = payload.clone();
        let navigate = navigate.clone();
        async move {
            match api.login(&payload).await {
                Ok(authenticated) => {
                    auth::login(session, authenticated.token, authenticated.user);
                    toasts.success("Bienvenido");
                    navigate("/users", Default::default());
                }
                Err(err) => {
                    field_errors.set(err.field_errors().unwrap_or_default());
                    general_error.set(Some(err.message()));
                }
            }
        }
    });
    let is_loading = login.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        general_error.set(None);
        let errors = validate_login(&email.get_untracked(), &password.get_untracked());
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(HashMap::new());
        login.dispatch(LoginPayload {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        });
    };

    let error_for = move |field: &'static str| {
        Signal::derive(move || field_errors.get().get(field).cloned())
    };

    view! {
        <div class="flex min-h-screen items-center justify-center bg-gray-50 px-4 py-12">
            <div class="w-full max-w-md space-y-8">
                <div class="text-center">
                    <h1 class="text-3xl font-extrabold text-indigo-600">"Fervor Juvenil"</h1>
                    <h2 class="mt-2 text-xl font-semibold text-gray-900">
                        "Inicia sesión en tu cuenta"
                    </h2>
                </div>
                <div class="rounded-lg bg-white p-6 shadow">
                    <form on:submit=on_submit>
                        <TextInput
                            label="Correo electrónico"
                            name="email"
                            value=email
                            input_type="email"
                            placeholder="correo@ejemplo.com"
                            required=true
                            error=error_for("email")
                        />
                        <TextInput
                            label="Contraseña"
                            name="password"
                            value=password
                            input_type="password"
                            placeholder="••••••••"
                            required=true
                            error=error_for("password")
                        />
                        {move || {
                            general_error.get().map(|message| view! {
                                <div class="mb-4 rounded-lg bg-red-50 p-3">
                                    <p class="text-sm font-medium text-red-800">{message}</p>
                                </div>
                            })
                        }}
                        <button
                            type="submit"
                            class="w-full rounded-lg bg-indigo-600 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-700 focus:outline-none focus:ring-2 focus:ring-indigo-500 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_credentials() {
        let errors = validate_login("", "");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email").unwrap(), "Este campo es obligatorio");
    }

    #[test]
    fn rejects_malformed_email() {
        let errors = validate_login("no-es-correo", "secreto");
        assert_eq!(errors.get("email").unwrap(), "Ingrese un correo válido");
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn accepts_valid_credentials() {
        assert!(validate_login("ana@example.com", "secreto").is_empty());
    }
}
