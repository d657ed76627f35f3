//! Theme colors
//! Golf-course greens by default, overridable from the `[theme]` table in config.toml

use ratatui::style::Color;

use crate::config::{ConfigError, ThemeOverrides};

/// Confetti palette
pub const CONFETTI_COLORS: [&str; 5] = ["#22c55e", "#4ade80", "#86efac", "#fbbf24", "#ffffff"];

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // Borders, input focus, key hints (green-500)
    pub accent_soft: Color, // Subtitles (green-100)
    pub success: Color,     // YES headline
    pub danger: Color,      // NO headline (red-400)
    pub text: Color,        // Primary text
    pub text_dim: Color,    // Placeholder, footer
    pub inactive: Color,    // Unfocused borders
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(34, 197, 94),
            accent_soft: Color::Rgb(220, 252, 231),
            success: Color::Rgb(74, 222, 128),
            danger: Color::Rgb(248, 113, 113),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(156, 163, 175),
            inactive: Color::Rgb(75, 85, 99),
        }
    }
}

impl Theme {
    /// Build a theme from config overrides, falling back to defaults per field
    pub fn from_overrides(overrides: &ThemeOverrides) -> Result<Self, ConfigError> {
        let base = Self::default();

        let pick = |key: &'static str, value: &Option<String>, fallback: Color| match value {
            Some(v) => parse_hex_color(v).ok_or_else(|| ConfigError::InvalidColor {
                key,
                value: v.clone(),
            }),
            None => Ok(fallback),
        };

        Ok(Self {
            accent: pick("accent", &overrides.accent, base.accent)?,
            accent_soft: pick("accent_soft", &overrides.accent_soft, base.accent_soft)?,
            success: pick("success", &overrides.success, base.success)?,
            danger: pick("danger", &overrides.danger, base.danger)?,
            text: pick("text", &overrides.text, base.text)?,
            text_dim: pick("text_dim", &overrides.text_dim, base.text_dim)?,
            inactive: pick("inactive", &overrides.inactive, base.inactive)?,
        })
    }

    /// Load from overrides; bad colors are logged and the defaults used
    pub fn load(overrides: &ThemeOverrides) -> Self {
        match Self::from_overrides(overrides) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Ignoring theme overrides: {}", e);
                Self::default()
            }
        }
    }
}

/// The confetti palette as terminal colors
pub fn confetti_palette() -> Vec<Color> {
    CONFETTI_COLORS
        .iter()
        .filter_map(|hex| parse_hex_color(hex))
        .collect()
}

/// Parse a hex color string (#RRGGBB or #RGB)
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');

    if !s.is_ascii() {
        return None;
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#22c55e"), Some(Color::Rgb(34, 197, 94)));
        assert_eq!(parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
    }

    #[test]
    fn test_confetti_palette_parses() {
        let palette = confetti_palette();
        assert_eq!(palette.len(), CONFETTI_COLORS.len());
        assert_eq!(palette[3], Color::Rgb(251, 191, 36));
    }

    #[test]
    fn test_overrides() {
        let overrides = ThemeOverrides {
            danger: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_overrides(&overrides).unwrap();
        assert_eq!(theme.danger, Color::Rgb(255, 0, 0));
        assert_eq!(theme.accent, Theme::default().accent);

        let bad = ThemeOverrides {
            accent: Some("green".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            Theme::from_overrides(&bad),
            Err(ConfigError::InvalidColor { key: "accent", .. })
        ));
    }
}
