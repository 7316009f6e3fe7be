// Global application constants

/// Base URL of the Fervor Juvenil REST API (v1).
pub fn api_base_url() -> String {
    option_env!("FERVOR_API_URL")
        .unwrap_or("/api/v1")
        .to_string()
}

// Pagination
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const ITEMS_PER_PAGE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

// Debounce times (milliseconds)
pub const DEBOUNCE_SEARCH_MS: u32 = 500;

// Toast auto-dismiss (milliseconds)
pub const TOAST_DURATION_MS: u32 = 5_000;

// Local storage keys
pub const STORAGE_KEY_TOKEN: &str = "accessToken";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_SIDEBAR: &str = "sidebarOpen";
