// ABOUTME: UI shell state: localized texts, color scheme, notifications.
// ABOUTME: Commands here are what the packaged page renders itself from.

use log::info;
use serde::Serialize;
use tauri::Emitter;
use tokio::sync::Mutex;

use crate::i18n::{self, Localizer};
use crate::theme::{ColorScheme, ToggleControl};

pub const PRODUCT_NAME: &str = "AktieTipset";

/// Fixed header height in logical pixels.
pub const HEADER_HEIGHT: u32 = 60;

/// Host→UI event fired after every toggle, carrying the new scheme.
pub const COLOR_SCHEME_CHANGED_EVENT: &str = "color-scheme-changed";

/// Host→UI channel the notification surface listens on.
pub const NOTIFICATIONS_CHANNEL: &str = "notifications";
/// Where the notification surface mounts.
pub const NOTIFICATIONS_POSITION: &str = "top-right";

/// Shared UI-session state: the color scheme and the locale resources.
pub struct ShellState {
    scheme: Mutex<ColorScheme>,
    localizer: &'static Localizer,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            scheme: Mutex::new(ColorScheme::default()),
            localizer: i18n::embedded(),
        }
    }

    pub fn localizer(&self) -> &Localizer {
        self.localizer
    }
}

/// Everything the static page needs to render the shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    pub title: String,
    pub welcome: String,
    pub placeholder: String,
    pub header_height: u32,
    pub toggle: ToggleControl,
}

impl ShellView {
    pub fn compose(localizer: &Localizer, scheme: ColorScheme) -> Self {
        let product = [("product", PRODUCT_NAME)];
        Self {
            title: localizer.translate("app.title"),
            welcome: i18n::interpolate(&localizer.translate("app.welcome"), &product),
            placeholder: localizer.translate("app.placeholder"),
            header_height: HEADER_HEIGHT,
            toggle: ToggleControl::for_scheme(scheme),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Push a notification onto the UI's notification surface.
pub fn notify(app: &tauri::AppHandle, notification: Notification) {
    let _ = app.emit(NOTIFICATIONS_CHANNEL, notification);
}

/// Current shell view for the active color scheme.
#[tauri::command]
pub async fn shell_view(state: tauri::State<'_, ShellState>) -> Result<ShellView, String> {
    let scheme = *state.scheme.lock().await;
    Ok(ShellView::compose(state.localizer, scheme))
}

/// Flip between light and dark and tell the UI about it.
#[tauri::command]
pub async fn toggle_color_scheme(
    app: tauri::AppHandle,
    state: tauri::State<'_, ShellState>,
) -> Result<ColorScheme, String> {
    let mut scheme = state.scheme.lock().await;
    *scheme = scheme.toggled();
    info!("[Shell] Color scheme toggled to {:?}", *scheme);
    let _ = app.emit(COLOR_SCHEME_CHANGED_EVENT, *scheme);
    Ok(*scheme)
}
