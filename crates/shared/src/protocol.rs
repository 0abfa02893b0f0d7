use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Predicate that selects every feature.
pub const TAUTOLOGY: &str = "1 = 1";

/// Boolean filter expression over the classified attribute field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Predicate(String);

impl Predicate {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    pub fn tautology() -> Self {
        Self(TAUTOLOGY.to_string())
    }

    pub fn is_tautology(&self) -> bool {
        self.0 == TAUTOLOGY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFilter {
    #[serde(rename = "where")]
    pub where_clause: Predicate,
}

/// Visual treatment applied to one side of a feature filter.
///
/// Read from config as a tagged table; serialized to the toolkit's CSS filter form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Treatment {
    Identity,
    DropShadow {
        offset_x: f32,
        offset_y: f32,
        blur_radius: f32,
        color: String,
    },
    BlurBrightness {
        blur_radius: f32,
        brightness_percent: f32,
    },
}

impl Treatment {
    pub fn is_identity(&self) -> bool {
        matches!(self, Treatment::Identity)
    }

    /// CSS filter text understood by the layer view, `None` for identity.
    pub fn css(&self) -> Option<String> {
        match self {
            Treatment::Identity => None,
            Treatment::DropShadow {
                offset_x,
                offset_y,
                blur_radius,
                color,
            } => Some(format!(
                "drop-shadow({offset_x}px, {offset_y}px, {blur_radius}px, {color})"
            )),
            Treatment::BlurBrightness {
                blur_radius,
                brightness_percent,
            } => Some(format!(
                "blur({blur_radius}px) brightness({brightness_percent}%)"
            )),
        }
    }
}

impl Serialize for Treatment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.css() {
            Some(css) => serializer.serialize_str(&css),
            None => serializer.serialize_none(),
        }
    }
}

/// Filter plus paired treatments, published wholesale to the layer view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerViewEffect {
    pub filter: FeatureFilter,
    #[serde(skip_serializing_if = "Treatment::is_identity")]
    pub included_effect: Treatment,
    #[serde(skip_serializing_if = "Treatment::is_identity")]
    pub excluded_effect: Treatment,
}

impl LayerViewEffect {
    pub fn predicate(&self) -> &Predicate {
        &self.filter.where_clause
    }

    pub fn is_cleared(&self) -> bool {
        self.filter.where_clause.is_tautology()
            && self.included_effect.is_identity()
            && self.excluded_effect.is_identity()
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
