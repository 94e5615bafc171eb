use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pageflow_compose::script::{Audience, Goal};
use pageflow_core::theme::ThemeConfig;

/// Hero section layout styles a design can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeroVariant {
    Spotlight,
    SplitScreen,
    Billboard,
    Minimal,
}

impl HeroVariant {
    pub const ALL: [HeroVariant; 4] = [
        HeroVariant::Spotlight,
        HeroVariant::SplitScreen,
        HeroVariant::Billboard,
        HeroVariant::Minimal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HeroVariant::Spotlight => "spotlight",
            HeroVariant::SplitScreen => "split-screen",
            HeroVariant::Billboard => "billboard",
            HeroVariant::Minimal => "minimal",
        }
    }

    /// Implementation weight, used for ranking tie-breaks.
    pub fn complexity_weight(&self) -> u8 {
        match self {
            HeroVariant::Minimal => 0,
            HeroVariant::Spotlight => 1,
            HeroVariant::SplitScreen => 2,
            HeroVariant::Billboard => 3,
        }
    }
}

/// Features section layout styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeaturesVariant {
    Grid,
    Alternating,
    Carousel,
    Tabs,
}

impl FeaturesVariant {
    pub const ALL: [FeaturesVariant; 4] = [
        FeaturesVariant::Grid,
        FeaturesVariant::Alternating,
        FeaturesVariant::Carousel,
        FeaturesVariant::Tabs,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeaturesVariant::Grid => "grid",
            FeaturesVariant::Alternating => "alternating",
            FeaturesVariant::Carousel => "carousel",
            FeaturesVariant::Tabs => "tabs",
        }
    }

    pub fn complexity_weight(&self) -> u8 {
        match self {
            FeaturesVariant::Grid => 1,
            FeaturesVariant::Alternating => 2,
            FeaturesVariant::Tabs => 2,
            FeaturesVariant::Carousel => 3,
        }
    }
}

/// One concrete combination of design axis choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignVariant {
    pub hero: HeroVariant,
    pub features: FeaturesVariant,
    pub theme_id: String,
}

impl DesignVariant {
    pub fn new(hero: HeroVariant, features: FeaturesVariant, theme_id: &str) -> Self {
        Self {
            hero,
            features,
            theme_id: theme_id.to_string(),
        }
    }

    /// Combined implementation weight of the variant's axis choices.
    pub fn complexity_weight(&self) -> u8 {
        self.hero.complexity_weight() + self.features.complexity_weight()
    }

    /// Stable human-readable identity, used in logs and tie-breaks.
    pub fn slug(&self) -> String {
        format!(
            "{}+{}+{}",
            self.hero.label(),
            self.features.label(),
            self.theme_id
        )
    }
}

/// Everything the rubrics need to score one design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSubmission {
    pub id: Uuid,
    pub variant: DesignVariant,
    pub theme: ThemeConfig,
    pub audience: Audience,
    pub goal: Goal,
}

impl DesignSubmission {
    pub fn new(variant: DesignVariant, theme: ThemeConfig, audience: Audience, goal: Goal) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant,
            theme,
            audience,
            goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_equality_and_hash_dedup() {
        use std::collections::HashSet;
        let a = DesignVariant::new(HeroVariant::Spotlight, FeaturesVariant::Grid, "dark-cyan");
        let b = DesignVariant::new(HeroVariant::Spotlight, FeaturesVariant::Grid, "dark-cyan");
        let c = DesignVariant::new(HeroVariant::Minimal, FeaturesVariant::Grid, "dark-cyan");

        let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(a.slug(), "spotlight+grid+dark-cyan");
    }

    #[test]
    fn complexity_weights_are_additive() {
        let v = DesignVariant::new(HeroVariant::Billboard, FeaturesVariant::Carousel, "light-navy");
        assert_eq!(v.complexity_weight(), 6);
        let m = DesignVariant::new(HeroVariant::Minimal, FeaturesVariant::Grid, "light-navy");
        assert_eq!(m.complexity_weight(), 1);
    }
}
