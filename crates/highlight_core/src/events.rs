//! Inputs to the selection controller and the reports it hands back.

use serde::Serialize;
use shared::{domain::Bucket, protocol::LayerViewEffect};

use crate::legend::LegendClickTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    LegendClick(LegendClickTarget),
    Reset,
}

impl SelectionEvent {
    pub fn label(label: impl Into<String>) -> Self {
        SelectionEvent::LegendClick(LegendClickTarget::from_text(label))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "bucket", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    Unselected,
    Selected(Bucket),
}

impl SelectionState {
    pub fn selected_bucket(&self) -> Option<&Bucket> {
        match self {
            SelectionState::Selected(bucket) => Some(bucket),
            SelectionState::Unselected => None,
        }
    }
}

/// What an event pushed out to the map collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "effect", rename_all = "snake_case")]
pub enum Publication {
    Effect(LayerViewEffect),
    /// The layer view was not ready; nothing was published and the state
    /// was left as it was.
    EffectSkipped,
    RendererReset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub state: SelectionState,
    pub publication: Publication,
}
