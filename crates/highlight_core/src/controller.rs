use std::sync::Arc;

use layer_view::RendererTarget;
use shared::domain::ClassBreaksRenderer;
use tracing::{debug, info};

use crate::{
    effect::EffectPolicy,
    error::ControllerError,
    events::{Publication, SelectionEvent, SelectionState, Transition},
    predicate::build_predicate,
    readiness::LayerViewSlot,
    scheme::ClassificationScheme,
};

/// Selection state machine behind the interactive legend.
///
/// A click on a known class label filters the layer view to that class and
/// applies the policy's treatments. A click on anything else in the legend
/// restores the base renderer. Reset clears the filter and leaves the
/// renderer alone.
pub struct SelectionController {
    scheme: ClassificationScheme,
    policy: EffectPolicy,
    base_renderer: ClassBreaksRenderer,
    renderer_target: Arc<dyn RendererTarget>,
    layer_view: LayerViewSlot,
    state: SelectionState,
}

impl SelectionController {
    pub fn new(
        base_renderer: ClassBreaksRenderer,
        policy: EffectPolicy,
        renderer_target: Arc<dyn RendererTarget>,
    ) -> Result<Self, ControllerError> {
        let scheme = ClassificationScheme::from_renderer(&base_renderer)?;
        Ok(Self {
            scheme,
            policy,
            base_renderer,
            renderer_target,
            layer_view: LayerViewSlot::new(),
            state: SelectionState::Unselected,
        })
    }

    /// Shared handle to the readiness slot, for the task awaiting layer load.
    pub fn layer_view_slot(&self) -> LayerViewSlot {
        self.layer_view.clone()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn scheme(&self) -> &ClassificationScheme {
        &self.scheme
    }

    pub fn handle(&mut self, event: SelectionEvent) -> Transition {
        match event {
            SelectionEvent::LegendClick(target) => self.click_label(target.label()),
            SelectionEvent::Reset => self.reset(),
        }
    }

    pub fn click_label(&mut self, label: &str) -> Transition {
        let Some(bucket) = self.scheme.find_bucket(label) else {
            self.state = SelectionState::Unselected;
            self.renderer_target.set_renderer(self.base_renderer.clone());
            info!(label, "legend click outside known classes; renderer restored");
            return self.transition(Publication::RendererReset);
        };

        let Some(layer_view) = self.layer_view.get() else {
            debug!(label, "layer view not ready; selection ignored");
            return self.transition(Publication::EffectSkipped);
        };

        let predicate = build_predicate(self.scheme.field(), bucket);
        let effect = self.policy.effect_for(predicate);
        layer_view.set_effect(effect.clone());
        info!(label, predicate = %effect.predicate(), "legend class selected");

        self.state = SelectionState::Selected(bucket.clone());
        self.transition(Publication::Effect(effect))
    }

    pub fn reset(&mut self) -> Transition {
        let Some(layer_view) = self.layer_view.get() else {
            debug!("layer view not ready; reset ignored");
            return self.transition(Publication::EffectSkipped);
        };

        let effect = EffectPolicy::cleared();
        layer_view.set_effect(effect.clone());
        info!("selection reset");

        self.state = SelectionState::Unselected;
        self.transition(Publication::Effect(effect))
    }

    fn transition(&self, publication: Publication) -> Transition {
        Transition {
            state: self.state.clone(),
            publication,
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
