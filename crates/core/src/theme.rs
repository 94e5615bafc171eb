//! Theme registry.
//!
//! Themes are immutable authored values selected by id; consumers treat
//! them as opaque beyond the documented fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Fixed color slots every theme must fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub text_muted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEffects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default)]
    pub glow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowIntensity {
    None,
    Subtle,
    Pronounced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationLevel {
    None,
    Subtle,
    Rich,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    /// CSS length, e.g. "0.75rem".
    pub border_radius: String,
    pub shadow_intensity: ShadowIntensity,
    pub animation_level: AnimationLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub id: String,
    pub name: String,
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<ThemeEffects>,
    pub style: ThemeStyle,
}

/// Static theme catalog, looked up by id.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<ThemeConfig>,
}

impl ThemeRegistry {
    pub fn new(themes: Vec<ThemeConfig>) -> Self {
        Self { themes }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            theme(
                "dark-cyan",
                "Dark Cyan",
                ThemeMode::Dark,
                ["#22d3ee", "#0e7490", "#f471b5", "#0b1120", "#1e293b", "#f8fafc", "#94a3b8"],
                Some(ThemeEffects {
                    gradient: Some("linear-gradient(135deg, #0b1120, #164e63)".to_string()),
                    glow: true,
                }),
                "0.75rem",
                ShadowIntensity::Pronounced,
                AnimationLevel::Rich,
            ),
            theme(
                "dark-violet",
                "Dark Violet",
                ThemeMode::Dark,
                ["#a78bfa", "#6d28d9", "#f0abfc", "#13111c", "#241f35", "#faf5ff", "#a1a1aa"],
                Some(ThemeEffects {
                    gradient: Some("linear-gradient(160deg, #13111c, #3b0764)".to_string()),
                    glow: false,
                }),
                "1rem",
                ShadowIntensity::Subtle,
                AnimationLevel::Subtle,
            ),
            theme(
                "light-navy",
                "Light Navy",
                ThemeMode::Light,
                ["#1e3a8a", "#3b82f6", "#f59e0b", "#ffffff", "#f1f5f9", "#0f172a", "#64748b"],
                None,
                "0.5rem",
                ShadowIntensity::Subtle,
                AnimationLevel::Subtle,
            ),
            theme(
                "light-warm",
                "Light Warm",
                ThemeMode::Light,
                ["#ea580c", "#9a3412", "#16a34a", "#fffbf5", "#fef3e2", "#1c1917", "#78716c"],
                None,
                "1.25rem",
                ShadowIntensity::None,
                AnimationLevel::None,
            ),
        ])
    }

    pub fn get(&self, theme_id: &str) -> Option<&ThemeConfig> {
        self.themes.iter().find(|t| t.id == theme_id)
    }

    pub fn all(&self) -> &[ThemeConfig] {
        &self.themes
    }

    pub fn ids(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.id.as_str()).collect()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn theme(
    id: &str,
    name: &str,
    mode: ThemeMode,
    colors: [&str; 7],
    effects: Option<ThemeEffects>,
    border_radius: &str,
    shadow_intensity: ShadowIntensity,
    animation_level: AnimationLevel,
) -> ThemeConfig {
    let [primary, secondary, accent, background, surface, text_primary, text_muted] = colors;
    ThemeConfig {
        id: id.to_string(),
        name: name.to_string(),
        mode,
        colors: ThemeColors {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            surface: surface.to_string(),
            text_primary: text_primary.to_string(),
            text_muted: text_muted.to_string(),
        },
        effects,
        style: ThemeStyle {
            border_radius: border_radius.to_string(),
            shadow_intensity,
            animation_level,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_both_modes() {
        let registry = ThemeRegistry::builtin();
        assert!(registry.all().iter().any(|t| t.mode == ThemeMode::Dark));
        assert!(registry.all().iter().any(|t| t.mode == ThemeMode::Light));
    }

    #[test]
    fn lookup_by_id() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.get("dark-cyan").unwrap().name, "Dark Cyan");
        assert!(registry.get("sepia").is_none());
    }

    #[test]
    fn theme_ids_are_unique() {
        let registry = ThemeRegistry::builtin();
        let mut ids = registry.ids();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.all().len());
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let registry = ThemeRegistry::builtin();
        let json = serde_json::to_value(registry.get("light-navy").unwrap()).unwrap();
        assert_eq!(json["mode"], "light");
        assert_eq!(json["style"]["shadowIntensity"], "subtle");
        assert_eq!(json["colors"]["textPrimary"], "#0f172a");
    }
}
