/// Element the app mounts on.
pub const MOUNT_ID: &str = "app";

/// How long a notice stays visible.
pub const NOTICE_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prefix for every backend path, empty for same origin.
    pub api_base: String,
    pub notice_timeout_ms: u32,
    pub unregister_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base: String::new(),
            notice_timeout_ms: NOTICE_TIMEOUT_MS,
            unregister_enabled: true,
        }
    }
}

impl Settings {
    /// Applies the optional `data-api-base` and `data-unregister` values
    /// found on the mount element.
    pub fn with_overrides(mut self, api_base: Option<String>, unregister: Option<String>) -> Self {
        if let Some(base) = api_base {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(flag) = unregister {
            self.unregister_enabled = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "off" | "false" | "0" | "no"
            );
        }
        self
    }
}
