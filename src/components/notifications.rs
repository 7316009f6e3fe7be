// Toast notifications
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::constants::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Context-provided toast store. Toasts auto-dismiss after a fixed
/// duration and can be closed manually.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.list.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.try_with_value(|n| n + 1).unwrap_or_default();
        self.next_id.try_set_value(id);
        self.list
            .try_update(|toasts| toasts.push(Toast { id, kind, message }));

        let handle = *self;
        Timeout::new(TOAST_DURATION_MS, move || handle.dismiss(id)).forget();
    }

    fn entries(&self) -> Vec<Toast> {
        self.list.get()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        list: create_rw_signal(Vec::new()),
        next_id: store_value(0),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts must be provided at the app root")
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed bottom-4 right-4 z-50 flex w-full max-w-sm flex-col gap-2">
            <For
                each=move || toasts.entries()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let accent = match toast.kind {
                        ToastKind::Success => "border-green-500",
                        ToastKind::Error => "border-red-500",
                        ToastKind::Warning => "border-yellow-500",
                        ToastKind::Info => "border-indigo-500",
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "flex items-start justify-between gap-3 rounded-lg border-l-4 bg-white px-4 py-3 shadow-lg {}",
                            accent,
                        )>
                            <p class="text-sm text-gray-800">{toast.message}</p>
                            <button
                                type="button"
                                class="text-gray-400 hover:text-gray-600"
                                aria-label="Cerrar notificación"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
