use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::{Bucket, ClassBreak, ClassBreaksRenderer, LineSymbol};

use crate::effect::EffectPolicy;

pub const FIELD_ENV: &str = "HIGHLIGHT__FIELD";
pub const LEGEND_TITLE_ENV: &str = "HIGHLIGHT__LEGEND_TITLE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub renderer: ClassBreaksRenderer,
    pub effects: EffectPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            renderer: crash_renderer(),
            effects: EffectPolicy::default(),
        }
    }
}

/// Road-segment crash totals, six classes.
pub fn crash_renderer() -> ClassBreaksRenderer {
    let class_break = |bucket: Bucket, color: &str, width: f32| ClassBreak {
        bucket,
        symbol: LineSymbol::new(color, width),
    };

    ClassBreaksRenderer {
        field: "crash".into(),
        legend_title: "Total Crashes".into(),
        class_breaks: vec![
            class_break(Bucket::open_low("0 - 25", 25), "#999", 0.75),
            class_break(Bucket::bounded("26 - 50", 26, 50), "#7f7f7f", 2.0),
            class_break(Bucket::bounded("51 - 100", 51, 100), "#595959", 3.5),
            class_break(Bucket::bounded("101 - 200", 101, 200), "#6b2b38", 5.0),
            class_break(Bucket::bounded("201 - 400", 201, 400), "#9c253d", 6.0),
            class_break(Bucket::bounded("400 or more", 401, 900), "#ff1947", 7.5),
        ],
    }
}

/// Reads `path` when given, then applies `HIGHLIGHT__*` environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
            parse_settings(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?
        }
        None => Settings::default(),
    };

    Ok(apply_overrides(settings, |key| std::env::var(key).ok()))
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str::<Settings>(raw)?)
}

fn apply_overrides(mut settings: Settings, lookup: impl Fn(&str) -> Option<String>) -> Settings {
    if let Some(v) = lookup(FIELD_ENV) {
        settings.renderer.field = v;
    }
    if let Some(v) = lookup(LEGEND_TITLE_ENV) {
        settings.renderer.legend_title = v;
    }
    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
