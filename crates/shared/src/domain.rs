use serde::{Deserialize, Serialize};

/// One labeled sub-range of a classification scheme.
///
/// `min_value == None` marks the open-low bucket, which matches every value
/// below `max_value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    pub max_value: i64,
}

impl Bucket {
    pub fn new(label: impl Into<String>, min_value: Option<i64>, max_value: i64) -> Self {
        Self {
            label: label.into(),
            min_value,
            max_value,
        }
    }

    pub fn open_low(label: impl Into<String>, max_value: i64) -> Self {
        Self::new(label, None, max_value)
    }

    pub fn bounded(label: impl Into<String>, min_value: i64, max_value: i64) -> Self {
        Self::new(label, Some(min_value), max_value)
    }

    pub fn is_open_low(&self) -> bool {
        self.min_value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSymbol {
    pub color: String,
    pub width: f32,
}

impl LineSymbol {
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// A bucket together with the symbol the renderer draws it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBreak {
    #[serde(flatten)]
    pub bucket: Bucket,
    pub symbol: LineSymbol,
}

/// Multi-class style definition for the crash layer. The "no match" legend
/// transition restores a clone of this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassBreaksRenderer {
    pub field: String,
    pub legend_title: String,
    pub class_breaks: Vec<ClassBreak>,
}

impl ClassBreaksRenderer {
    pub fn buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.class_breaks.iter().map(|class_break| &class_break.bucket)
    }

    pub fn symbol_for(&self, label: &str) -> Option<&LineSymbol> {
        self.class_breaks
            .iter()
            .find(|class_break| class_break.bucket.label == label)
            .map(|class_break| &class_break.symbol)
    }
}
