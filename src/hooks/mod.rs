// Reusable view-state hooks
pub mod debounce;
pub mod pagination;
pub mod request;
pub mod sort;

pub use debounce::use_debounced;
pub use pagination::{use_pagination, PageState, PaginationHandle};
pub use request::{use_request, RequestHandle};
pub use sort::SortState;
