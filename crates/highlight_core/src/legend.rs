use serde::{Deserialize, Serialize};
use shared::domain::{ClassBreaksRenderer, LineSymbol};

/// Element the user clicked inside the legend container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendClickTarget {
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub inner_text: Option<String>,
}

impl LegendClickTarget {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            alt: None,
            inner_text: Some(text.into()),
        }
    }

    /// Swatch images carry their label in `alt`; text rows in their inner text.
    /// An empty `alt` falls through to the inner text.
    pub fn label(&self) -> &str {
        match self.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => self.inner_text.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub symbol: LineSymbol,
}

/// What the legend widget shows for the classified layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn from_renderer(renderer: &ClassBreaksRenderer) -> Self {
        Self {
            title: renderer.legend_title.clone(),
            entries: renderer
                .class_breaks
                .iter()
                .map(|class_break| LegendEntry {
                    label: class_break.bucket.label.clone(),
                    symbol: class_break.symbol.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/legend_tests.rs"]
mod tests;
