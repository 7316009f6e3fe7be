// Session management
use leptos::*;
use leptos_router::use_navigate;

use crate::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use crate::types::User;

/// In-memory session state, mirrored into `localStorage` so it survives
/// a reload. Only the login/logout flow writes it; the HTTP client reads
/// the persisted token on every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

pub type SessionStore = RwSignal<Session>;

/// Creates the session store, restoring any persisted session, and makes
/// it available to the component tree through context.
pub fn provide_session() -> SessionStore {
    let store = create_rw_signal(restore_session());
    provide_context(store);
    store
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("Session must be provided at the app root")
}

pub fn login(store: SessionStore, token: String, user: User) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(STORAGE_KEY_TOKEN, &token);
        let _ = storage.set_item(
            STORAGE_KEY_USER,
            &serde_json::to_string(&user).unwrap_or_default(),
        );
    }
    store.set(Session {
        token: Some(token),
        user: Some(user),
    });
}

pub fn logout(store: SessionStore) {
    clear_stored_session();
    store.set(Session::default());
}

/// Token as persisted, read outside the reactive graph by the HTTP client.
pub fn stored_token() -> Option<String> {
    let storage = local_storage()?;
    storage.get_item(STORAGE_KEY_TOKEN).ok().flatten()
}

pub fn clear_stored_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_TOKEN);
        let _ = storage.remove_item(STORAGE_KEY_USER);
    }
}

fn restore_session() -> Session {
    let Some(storage) = local_storage() else {
        return Session::default();
    };
    let token = storage.get_item(STORAGE_KEY_TOKEN).ok().flatten();
    let user = storage
        .get_item(STORAGE_KEY_USER)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str::<User>(&raw).ok());
    match token {
        Some(token) => Session {
            token: Some(token),
            user,
        },
        None => Session::default(),
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Route guard: renders its children only for authenticated sessions and
/// redirects everyone else to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    create_effect(move |_| {
        if !session.get().is_authenticated() {
            navigate("/login", Default::default());
        }
    });

    move || {
        if session.get().is_authenticated() {
            children().into_view()
        } else {
            ().into_view()
        }
    }
}
