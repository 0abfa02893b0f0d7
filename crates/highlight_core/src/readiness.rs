use std::sync::Arc;

use layer_view::{LayerViewHandle, LayerViewSource};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::error::ControllerError;

/// Set-once slot for the layer view handle. Empty until the layer finishes
/// loading; clones share the same slot.
#[derive(Clone, Default)]
pub struct LayerViewSlot {
    cell: Arc<OnceCell<Arc<dyn LayerViewHandle>>>,
}

impl LayerViewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, handle: Arc<dyn LayerViewHandle>) -> Result<(), ControllerError> {
        self.cell
            .set(handle)
            .map_err(|_| ControllerError::LayerViewAlreadyAttached)?;
        info!("layer view ready");
        Ok(())
    }

    /// Waits for `source` to resolve the layer view and stores it.
    pub async fn resolve_from(&self, source: &dyn LayerViewSource) -> Result<(), ControllerError> {
        if self.is_ready() {
            return Err(ControllerError::LayerViewAlreadyAttached);
        }
        match source.when_layer_view().await {
            Ok(handle) => self.attach(handle),
            Err(err) => {
                warn!("layer view failed to load: {err:#}");
                Err(ControllerError::LayerViewLoad(err))
            }
        }
    }

    pub fn get(&self) -> Option<&Arc<dyn LayerViewHandle>> {
        self.cell.get()
    }

    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }
}

impl std::fmt::Debug for LayerViewSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerViewSlot")
            .field("ready", &self.is_ready())
            .finish()
    }
}
