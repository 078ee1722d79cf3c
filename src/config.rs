/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Backend base URL, injected at build time (`DASHBOARD_API_URL=... trunk build`)
    pub const API_BASE_URL: Option<&'static str> = option_env!("DASHBOARD_API_URL");

    /// Static key sent as `x-api-key`, injected at build time
    pub const API_KEY: Option<&'static str> = option_env!("DASHBOARD_API_KEY");

    /// Upper bound for the initial fetch of both resources (15 seconds)
    pub const FETCH_TIMEOUT_MS: u32 = 15_000;

    /// Quiet period before charts re-render after a window resize
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
