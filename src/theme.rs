// ABOUTME: Two-valued color scheme and the theme-toggle control state.
// ABOUTME: The toggle always announces the scheme it will switch to.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Dark
    }
}

impl ColorScheme {
    /// The other scheme; toggling is the only transition.
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// View state of the theme-toggle control for one scheme.
///
/// Label and icon name the *target* scheme, not the current one: with
/// dark active the control reads "Activate light mode" and shows a sun.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleControl {
    pub scheme: ColorScheme,
    pub label: String,
    pub icon: String,
    pub accent: String,
}

impl ToggleControl {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let (label, icon, accent) = match scheme {
            ColorScheme::Dark => ("Activate light mode", "sun", "yellow"),
            ColorScheme::Light => ("Activate dark mode", "moon-stars", "blue"),
        };
        Self {
            scheme,
            label: label.to_string(),
            icon: icon.to_string(),
            accent: accent.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_is_dark() {
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
    }

    #[test]
    fn toggling_twice_round_trips() {
        let start = ColorScheme::default();
        assert_eq!(start.toggled(), ColorScheme::Light);
        assert_eq!(start.toggled().toggled(), start);
    }

    #[test]
    fn toggle_label_names_the_target_scheme() {
        let dark = ToggleControl::for_scheme(ColorScheme::Dark);
        assert_eq!(dark.label, "Activate light mode");

        let light = ToggleControl::for_scheme(ColorScheme::Light);
        assert_eq!(light.label, "Activate dark mode");
    }

    #[test]
    fn toggle_icon_and_accent_follow_the_scheme() {
        let dark = ToggleControl::for_scheme(ColorScheme::Dark);
        assert_eq!((dark.icon.as_str(), dark.accent.as_str()), ("sun", "yellow"));

        let light = ToggleControl::for_scheme(ColorScheme::Light);
        assert_eq!(
            (light.icon.as_str(), light.accent.as_str()),
            ("moon-stars", "blue")
        );
    }

    #[test]
    fn scheme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ColorScheme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&ColorScheme::Light).unwrap(), "\"light\"");
    }
}
