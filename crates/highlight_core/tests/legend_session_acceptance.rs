use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::anyhow;
use async_trait::async_trait;
use highlight_core::{
    config::Settings, ControllerError, Publication, SelectionController, SelectionEvent,
    SelectionState,
};
use layer_view::{LayerViewHandle, LayerViewSource, RendererTarget};
use shared::{domain::ClassBreaksRenderer, protocol::LayerViewEffect};
use tokio::sync::oneshot;

#[derive(Default)]
struct MapLayerView {
    effects: Mutex<Vec<LayerViewEffect>>,
}

impl MapLayerView {
    fn last_where(&self) -> Option<String> {
        self.effects
            .lock()
            .expect("effects lock")
            .last()
            .map(|effect| effect.predicate().to_string())
    }
}

impl LayerViewHandle for MapLayerView {
    fn set_effect(&self, effect: LayerViewEffect) {
        self.effects.lock().expect("effects lock").push(effect);
    }
}

struct CrashLayer {
    renderer: Mutex<ClassBreaksRenderer>,
}

impl RendererTarget for CrashLayer {
    fn renderer(&self) -> ClassBreaksRenderer {
        self.renderer.lock().expect("renderer lock").clone()
    }

    fn set_renderer(&self, renderer: ClassBreaksRenderer) {
        *self.renderer.lock().expect("renderer lock") = renderer;
    }
}

/// Resolves once the test releases the layer load.
struct DeferredLoad {
    release: Mutex<Option<oneshot::Receiver<()>>>,
    view: Arc<MapLayerView>,
}

#[async_trait]
impl LayerViewSource for DeferredLoad {
    async fn when_layer_view(&self) -> anyhow::Result<Arc<dyn LayerViewHandle>> {
        let release = self
            .release
            .lock()
            .expect("release lock")
            .take()
            .ok_or_else(|| anyhow!("layer load already consumed"))?;
        release.await?;
        Ok(self.view.clone())
    }
}

struct FailingLoad;

#[async_trait]
impl LayerViewSource for FailingLoad {
    async fn when_layer_view(&self) -> anyhow::Result<Arc<dyn LayerViewHandle>> {
        Err(anyhow!("feature service unavailable"))
    }
}

fn controller(settings: &Settings) -> (SelectionController, Arc<CrashLayer>) {
    let layer = Arc::new(CrashLayer {
        renderer: Mutex::new(settings.renderer.clone()),
    });
    let controller = SelectionController::new(
        settings.renderer.clone(),
        settings.effects.clone(),
        layer.clone(),
    )
    .expect("controller");
    (controller, layer)
}

#[tokio::test]
async fn legend_session_after_layer_load() {
    let settings = Settings::default();
    let (mut controller, layer) = controller(&settings);
    let view = Arc::new(MapLayerView::default());
    let (release_tx, release_rx) = oneshot::channel();
    let source = DeferredLoad {
        release: Mutex::new(Some(release_rx)),
        view: view.clone(),
    };

    let slot = controller.layer_view_slot();
    let loading = tokio::spawn(async move { slot.resolve_from(&source).await });

    let early = controller.handle(SelectionEvent::label("0 - 25"));
    assert_eq!(early.publication, Publication::EffectSkipped);
    assert!(view.last_where().is_none());

    release_tx.send(()).expect("release load");
    tokio::time::timeout(Duration::from_secs(5), loading)
        .await
        .expect("load finished in time")
        .expect("join")
        .expect("layer view attached");

    controller.handle(SelectionEvent::label("0 - 25"));
    assert_eq!(view.last_where().as_deref(), Some("crash < 25"));

    controller.handle(SelectionEvent::label("101 - 200"));
    assert_eq!(
        view.last_where().as_deref(),
        Some("crash > 101 AND crash <= 200")
    );

    let title = controller.handle(SelectionEvent::label("Total Crashes"));
    assert_eq!(title.state, SelectionState::Unselected);
    assert_eq!(title.publication, Publication::RendererReset);
    assert_eq!(layer.renderer(), settings.renderer);
    assert_eq!(
        view.last_where().as_deref(),
        Some("crash > 101 AND crash <= 200")
    );

    controller.handle(SelectionEvent::label("101 - 200"));
    let reset = controller.handle(SelectionEvent::Reset);
    assert_eq!(reset.state, SelectionState::Unselected);
    assert_eq!(view.last_where().as_deref(), Some("1 = 1"));
}

#[tokio::test]
async fn failed_layer_load_leaves_slot_empty() {
    let settings = Settings::default();
    let (mut controller, _layer) = controller(&settings);

    let err = controller
        .layer_view_slot()
        .resolve_from(&FailingLoad)
        .await
        .expect_err("load fails");
    assert!(matches!(err, ControllerError::LayerViewLoad(_)));
    assert!(err.to_string().contains("feature service unavailable"));
    assert!(!controller.layer_view_slot().is_ready());

    let reset = controller.handle(SelectionEvent::Reset);
    assert_eq!(reset.publication, Publication::EffectSkipped);
}
