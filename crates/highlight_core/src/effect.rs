use serde::Deserialize;
use shared::protocol::{FeatureFilter, LayerViewEffect, Predicate, Treatment};

/// Pair of treatments applied around a selection filter: `included` to
/// matching features, `excluded` to everything else.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectPolicy {
    pub included: Treatment,
    pub excluded: Treatment,
}

impl Default for EffectPolicy {
    fn default() -> Self {
        Self {
            included: Treatment::DropShadow {
                offset_x: 3.0,
                offset_y: 3.0,
                blur_radius: 3.0,
                color: "black".into(),
            },
            excluded: Treatment::BlurBrightness {
                blur_radius: 5.5,
                brightness_percent: 80.0,
            },
        }
    }
}

impl EffectPolicy {
    pub fn effect_for(&self, predicate: Predicate) -> LayerViewEffect {
        LayerViewEffect {
            filter: FeatureFilter {
                where_clause: predicate,
            },
            included_effect: self.included.clone(),
            excluded_effect: self.excluded.clone(),
        }
    }

    /// Tautology filter with no treatment on either side.
    pub fn cleared() -> LayerViewEffect {
        LayerViewEffect {
            filter: FeatureFilter {
                where_clause: Predicate::tautology(),
            },
            included_effect: Treatment::Identity,
            excluded_effect: Treatment::Identity,
        }
    }
}

#[cfg(test)]
#[path = "tests/effect_tests.rs"]
mod tests;
