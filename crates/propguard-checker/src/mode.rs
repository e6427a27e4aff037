//! Development/production switch.

use std::sync::OnceLock;

/// Environment variable read by [`Mode::from_env`].
pub const MODE_ENV_VAR: &str = "PROPGUARD_MODE";

/// Whether checkers do any work.
///
/// Validation is opt-in: only `Development` validates. In `Production`
/// every checker is a no-op and invalid input passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Development,
    #[default]
    Production,
}

impl Mode {
    /// `development` or `dev` (any case) select development; anything else
    /// is production.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Mode from [`MODE_ENV_VAR`], read once per process. Unset means
    /// production.
    pub fn from_env() -> Self {
        static MODE: OnceLock<Mode> = OnceLock::new();
        *MODE.get_or_init(|| {
            std::env::var(MODE_ENV_VAR)
                .map(|v| Mode::parse(&v))
                .unwrap_or_default()
        })
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}
