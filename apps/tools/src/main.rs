use std::{path::PathBuf, sync::Arc, sync::Mutex};

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use highlight_core::{
    build_predicate,
    config::{load_settings, Settings},
    ClassificationScheme, Legend, LegendClickTarget, SelectionController, SelectionEvent,
};
use layer_view::{LayerViewHandle, LayerViewSource, RendererTarget};
use shared::{domain::ClassBreaksRenderer, protocol::LayerViewEffect};
use tracing::info;

#[derive(Parser, Debug)]
struct Cli {
    /// TOML settings file; the built-in crash map is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the classification and print the legend.
    Validate,
    /// Print the filter predicate for one legend label.
    Predicate { label: String },
    /// Replay legend events, e.g. `click:0 - 25`, `alt:26 - 50`, `reset`.
    Replay {
        #[arg(required = true)]
        events: Vec<String>,
    },
}

struct PrintingLayerView {
    published: Mutex<u32>,
}

impl LayerViewHandle for PrintingLayerView {
    fn set_effect(&self, effect: LayerViewEffect) {
        let mut published = self.published.lock().unwrap_or_else(|e| e.into_inner());
        *published += 1;
        match serde_json::to_string(&effect) {
            Ok(json) => println!("effect #{published}: {json}"),
            Err(err) => tracing::error!("failed to encode effect: {err}"),
        }
    }
}

struct ImmediateLoad(Arc<PrintingLayerView>);

#[async_trait]
impl LayerViewSource for ImmediateLoad {
    async fn when_layer_view(&self) -> Result<Arc<dyn LayerViewHandle>> {
        Ok(self.0.clone())
    }
}

struct PrintingLayer {
    renderer: Mutex<ClassBreaksRenderer>,
}

impl RendererTarget for PrintingLayer {
    fn renderer(&self) -> ClassBreaksRenderer {
        self.renderer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_renderer(&self, renderer: ClassBreaksRenderer) {
        println!(
            "renderer: restored '{}' ({} classes)",
            renderer.legend_title,
            renderer.class_breaks.len()
        );
        *self.renderer.lock().unwrap_or_else(|e| e.into_inner()) = renderer;
    }
}

fn parse_event(raw: &str) -> Result<SelectionEvent> {
    if raw.eq_ignore_ascii_case("reset") {
        return Ok(SelectionEvent::Reset);
    }
    let (kind, text) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("unrecognized event '{raw}'; expected click:<label>, alt:<label> or reset"))?;
    let target = match kind {
        "click" => LegendClickTarget::from_text(text),
        "alt" => LegendClickTarget {
            alt: Some(text.to_string()),
            inner_text: None,
        },
        other => bail!("unknown event kind '{other}'"),
    };
    Ok(SelectionEvent::LegendClick(target))
}

async fn replay(settings: Settings, raw_events: &[String]) -> Result<()> {
    let events = raw_events
        .iter()
        .map(|raw| parse_event(raw))
        .collect::<Result<Vec<_>>>()?;

    let layer = Arc::new(PrintingLayer {
        renderer: Mutex::new(settings.renderer.clone()),
    });
    let mut controller =
        SelectionController::new(settings.renderer, settings.effects, layer)?;
    let view = Arc::new(PrintingLayerView {
        published: Mutex::new(0),
    });
    controller
        .layer_view_slot()
        .resolve_from(&ImmediateLoad(view))
        .await?;

    for event in events {
        let transition = controller.handle(event);
        println!("transition: {}", serde_json::to_string(&transition)?);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    info!(field = %settings.renderer.field, "settings loaded");

    match cli.command {
        Command::Validate => {
            let scheme = ClassificationScheme::from_renderer(&settings.renderer)
                .context("classification is invalid")?;
            println!("valid: {} classes on field '{}'", scheme.len(), scheme.field());
            println!(
                "{}",
                serde_json::to_string_pretty(&Legend::from_renderer(&settings.renderer))?
            );
        }
        Command::Predicate { label } => {
            let scheme = ClassificationScheme::from_renderer(&settings.renderer)?;
            let bucket = scheme
                .find_bucket(&label)
                .ok_or_else(|| anyhow!("no class labeled '{label}'"))?;
            println!("{}", build_predicate(scheme.field(), bucket));
        }
        Command::Replay { events } => replay(settings, &events).await?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
