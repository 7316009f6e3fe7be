// Request-state adapter
use std::future::Future;

use leptos::*;

use crate::api::ApiError;

/// Signal bundle for an asynchronous fetch: `data`, `error`, `is_loading`
/// plus a `run` trigger. Failures are captured into `error`, never thrown;
/// previously loaded data is kept on failure so the view does not flash
/// back to an empty state.
pub struct RequestHandle<T: 'static> {
    pub data: RwSignal<Option<T>>,
    pub error: RwSignal<Option<ApiError>>,
    pub is_loading: RwSignal<bool>,
    generation: StoredValue<u64>,
}

impl<T> Clone for RequestHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RequestHandle<T> {}

impl<T> RequestHandle<T> {
    /// Issues a request. Each call takes a fresh generation ticket and only
    /// the holder of the newest ticket may commit its outcome, so a slow
    /// response from an earlier call can never overwrite a later one.
    /// Updates after the owner was disposed are dropped.
    pub fn run(&self, fut: impl Future<Output = Result<T, ApiError>> + 'static) {
        let ticket = self
            .generation
            .try_with_value(|g| g + 1)
            .unwrap_or_default();
        self.generation.try_set_value(ticket);
        self.is_loading.try_set(true);
        self.error.try_set(None);

        let handle = *self;
        spawn_local(async move {
            let result = fut.await;
            if handle.generation.try_with_value(|g| *g) != Some(ticket) {
                return;
            }
            match result {
                Ok(value) => {
                    handle.data.try_set(Some(value));
                    handle.error.try_set(None);
                }
                Err(err) => {
                    handle.error.try_set(Some(err));
                }
            }
            handle.is_loading.try_set(false);
        });
    }

    pub fn reset(&self) {
        let next = self
            .generation
            .try_with_value(|g| g + 1)
            .unwrap_or_default();
        self.generation.try_set_value(next);
        self.data.try_set(None);
        self.error.try_set(None);
        self.is_loading.try_set(false);
    }
}

pub fn use_request<T>() -> RequestHandle<T> {
    RequestHandle {
        data: create_rw_signal(None),
        error: create_rw_signal(None),
        is_loading: create_rw_signal(false),
        generation: store_value(0),
    }
}
