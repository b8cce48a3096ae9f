use std::path::PathBuf;

/// Catalog service used when no other base URL is configured.
pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "STOREFRONT_HOME";

pub struct Config {
    /// Base URL of the remote catalog and account service.
    pub api_base: String,
    /// Directory holding the cart and session documents.
    pub data_dir: PathBuf,
    /// Output reduction level. 0 prints everything, 1 drops headers and
    /// banners, 2 prints results only.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            data_dir: default_data_dir(),
            quiet: 0,
            no_banner: false,
        }
    }
}

/// Resolves where local documents are kept.
///
/// # Resolution Order
///
/// 1. `STOREFRONT_HOME` environment variable.
/// 2. Platform data directory (e.g. `~/.local/share/storefront`).
/// 3. System temp directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        return PathBuf::from(dir);
    }

    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("storefront")
}
