// ABOUTME: Window host: geometry, content-source selection, and lifecycle policy.
// ABOUTME: Decides between the packaged bundle and a development server URL.

use log::info;
use tauri::{Manager, WebviewUrl};
use url::Url;

pub const MAIN_WINDOW_LABEL: &str = "main";

pub const DEFAULT_WIDTH: f64 = 1280.0;
pub const DEFAULT_HEIGHT: f64 = 800.0;
pub const MIN_WIDTH: f64 = 1024.0;
pub const MIN_HEIGHT: f64 = 720.0;

/// Any non-empty value switches the window to the development server.
pub const DEV_FLAG_ENV: &str = "AKTIETIPSET_DEV";
/// Overrides the development server address; setting it implies dev mode.
pub const DEV_URL_ENV: &str = "AKTIETIPSET_DEV_URL";
pub const DEFAULT_DEV_URL: &str = "http://localhost:5173";

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("invalid development server URL '{value}': {source}")]
    InvalidDevUrl {
        value: String,
        source: url::ParseError,
    },
    #[error(transparent)]
    Tauri(#[from] tauri::Error),
}

/// Where the main window loads its page from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// The bundled production entry file.
    Packaged,
    /// A development server, with devtools opened alongside.
    DevServer(Url),
}

impl ContentSource {
    /// Pick the content source from the two environment values. Empty
    /// values count as unset.
    pub fn resolve(dev_flag: Option<&str>, dev_url: Option<&str>) -> Result<Self, WindowError> {
        let dev_url = dev_url.filter(|v| !v.trim().is_empty());
        let dev_flag = dev_flag.filter(|v| !v.trim().is_empty());

        let address = match (dev_url, dev_flag) {
            (Some(url), _) => url,
            (None, Some(_)) => DEFAULT_DEV_URL,
            (None, None) => return Ok(ContentSource::Packaged),
        };
        let parsed = Url::parse(address).map_err(|source| WindowError::InvalidDevUrl {
            value: address.to_string(),
            source,
        })?;
        Ok(ContentSource::DevServer(parsed))
    }

    pub fn from_env() -> Result<Self, WindowError> {
        let dev_flag = std::env::var(DEV_FLAG_ENV).ok();
        let dev_url = std::env::var(DEV_URL_ENV).ok();
        Self::resolve(dev_flag.as_deref(), dev_url.as_deref())
    }

    pub fn is_development(&self) -> bool {
        matches!(self, ContentSource::DevServer(_))
    }

    fn webview_url(&self) -> WebviewUrl {
        match self {
            ContentSource::Packaged => WebviewUrl::App("index.html".into()),
            ContentSource::DevServer(url) => WebviewUrl::External(url.clone()),
        }
    }
}

/// How many top-level windows are currently open.
///
/// Injectable so the reopen policy can be exercised against zero, one,
/// or many windows without a running app.
pub trait WindowRegistry {
    fn open_window_count(&self) -> usize;
}

impl WindowRegistry for tauri::AppHandle {
    fn open_window_count(&self) -> usize {
        self.webview_windows().len()
    }
}

/// Reactivation creates a window only when none exist.
pub fn should_create_on_reopen(registry: &dyn WindowRegistry) -> bool {
    registry.open_window_count() == 0
}

/// Closing the last window quits the process everywhere but macOS,
/// where the app conventionally stays resident.
pub fn exits_on_last_window_close(os: &str) -> bool {
    os != "macos"
}

/// Create the main window sized within the fixed bounds, loading the
/// environment-selected content source.
pub fn create_main_window(app: &tauri::AppHandle) -> Result<tauri::WebviewWindow, WindowError> {
    let source = ContentSource::from_env()?;
    info!("[Window] Creating main window from {:?}", source);

    let window = tauri::WebviewWindowBuilder::new(app, MAIN_WINDOW_LABEL, source.webview_url())
        .title("AktieTipset")
        .inner_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
        .min_inner_size(MIN_WIDTH, MIN_HEIGHT)
        .build()?;

    if source.is_development() {
        window.open_devtools();
    }

    Ok(window)
}

/// Reopen signal (e.g. relaunch from the dock): recreate the main
/// window if every window has been closed.
pub fn handle_reopen(app: &tauri::AppHandle) {
    if !should_create_on_reopen(app) {
        return;
    }
    if let Err(e) = create_main_window(app) {
        log::error!("[Window] Failed to recreate main window: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubRegistry(usize);

    impl WindowRegistry for StubRegistry {
        fn open_window_count(&self) -> usize {
            self.0
        }
    }

    // =========================================================================
    // Content-source selection
    // =========================================================================

    #[test]
    fn no_environment_values_means_packaged_entry() {
        let source = ContentSource::resolve(None, None).unwrap();
        assert_eq!(source, ContentSource::Packaged);
        assert!(!source.is_development());
    }

    #[test]
    fn empty_environment_values_count_as_unset() {
        let source = ContentSource::resolve(Some(""), Some("  ")).unwrap();
        assert_eq!(source, ContentSource::Packaged);
    }

    #[test]
    fn dev_flag_selects_the_default_dev_server() {
        let source = ContentSource::resolve(Some("1"), None).unwrap();
        assert_eq!(
            source,
            ContentSource::DevServer(Url::parse(DEFAULT_DEV_URL).unwrap())
        );
        assert!(source.is_development());
    }

    #[test]
    fn dev_url_override_wins_and_implies_dev_mode() {
        let source = ContentSource::resolve(None, Some("http://localhost:4000")).unwrap();
        assert_eq!(
            source,
            ContentSource::DevServer(Url::parse("http://localhost:4000").unwrap())
        );
    }

    #[test]
    fn invalid_dev_url_is_an_error() {
        let err = ContentSource::resolve(None, Some("not a url")).unwrap_err();
        assert!(matches!(err, WindowError::InvalidDevUrl { .. }));
    }

    #[test]
    fn packaged_entry_is_a_bundle_path_not_a_network_url() {
        let source = ContentSource::resolve(None, None).unwrap();
        assert!(matches!(source.webview_url(), WebviewUrl::App(_)));
    }

    // =========================================================================
    // Lifecycle policy
    // =========================================================================

    #[test]
    fn reopen_with_zero_windows_creates_one() {
        assert!(should_create_on_reopen(&StubRegistry(0)));
    }

    #[test]
    fn reopen_with_windows_open_creates_none() {
        assert!(!should_create_on_reopen(&StubRegistry(1)));
        assert!(!should_create_on_reopen(&StubRegistry(5)));
    }

    #[test]
    fn only_macos_stays_resident_after_last_window_closes() {
        assert!(!exits_on_last_window_close("macos"));
        assert!(exits_on_last_window_close("linux"));
        assert!(exits_on_last_window_close("windows"));
    }
}
