//! Branding and application identity configuration.
//!
//! This module centralizes the application's names and paths so the binaries,
//! the config loader and the rendered page agree on them.

/// The human-readable display name of the application.
///
/// Used in:
/// - The terminal title bar
/// - The HTML document title suffix
/// - Help text
pub const APP_DISPLAY_NAME: &str = "devfolio";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "devfolio";

/// The directory name for application data (config).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "devfolio";

/// The GitHub repository owner.
pub const GITHUB_OWNER: &str = "emmanuel-lara-dev";

/// The GitHub repository name.
pub const GITHUB_REPO: &str = "devfolio";

/// The full GitHub repository URL.
pub const GITHUB_URL: &str = "https://github.com/emmanuel-lara-dev/devfolio";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Personal portfolio page for the terminal and the browser";

/// GitHub issues URL.
pub fn github_issues_url() -> String {
    format!("{}/issues", GITHUB_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(GITHUB_URL.starts_with("https://github.com/"));
        assert!(GITHUB_URL.contains(GITHUB_OWNER));
        assert!(GITHUB_URL.contains(GITHUB_REPO));
    }

    #[test]
    fn test_issues_url() {
        assert_eq!(github_issues_url(), format!("{}/issues", GITHUB_URL));
    }
}
