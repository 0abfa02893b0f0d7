//! Seams to the host mapping toolkit: the queryable layer view, the loader
//! that resolves it, and the layer's renderer.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{domain::ClassBreaksRenderer, protocol::LayerViewEffect};

/// Queryable view of the crash layer. Only valid once the layer has loaded.
pub trait LayerViewHandle: Send + Sync {
    /// Replaces the current effect wholesale.
    fn set_effect(&self, effect: LayerViewEffect);
}

/// Resolves the layer view after the asynchronous layer load.
#[async_trait]
pub trait LayerViewSource: Send + Sync {
    async fn when_layer_view(&self) -> anyhow::Result<Arc<dyn LayerViewHandle>>;
}

/// The feature layer's renderer property. `renderer` is the toolkit's
/// get/clone side; the controller only sets.
pub trait RendererTarget: Send + Sync {
    fn renderer(&self) -> ClassBreaksRenderer;
    fn set_renderer(&self, renderer: ClassBreaksRenderer);
}
