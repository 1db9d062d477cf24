use crate::domain::chart::{ChartId, ChartLayout, Margin};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;

const CONFIG_FILE: &str = "config/dashboard";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub charts: ChartsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatasetSettings {
    pub path: String,
    pub date_formats: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChartsConfig {
    pub template: String,
    pub height: u32,
    pub margin: Margin,
    #[serde(default)]
    pub overrides: HashMap<String, LayoutOverride>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct LayoutOverride {
    pub height: Option<u32>,
    pub margin: Option<Margin>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: "assets/supermarket_sales.csv".to_string(),
            date_formats: vec!["%m/%d/%Y".to_string(), "%Y-%m-%d".to_string()],
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        let mut overrides = HashMap::new();
        overrides.insert(
            ChartId::IncomePerProduct.as_str().to_string(),
            LayoutOverride {
                height: Some(300),
                margin: Some(Margin { l: 0, r: 0, t: 20, b: 10 }),
            },
        );

        Self {
            template: "plotly_dark".to_string(),
            height: 200,
            margin: Margin { l: 0, r: 0, t: 20, b: 20 },
            overrides,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

impl ChartsConfig {
    /// Shared layout with any per-chart override applied
    pub fn layout_for(&self, id: ChartId) -> ChartLayout {
        let over = self.overrides.get(id.as_str());
        ChartLayout {
            template: self.template.clone(),
            height: over.and_then(|o| o.height).unwrap_or(self.height),
            margin: over.and_then(|o| o.margin).unwrap_or(self.margin),
        }
    }
}

/// Built-in defaults overlaid with `config/dashboard.toml` when present
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_over_defaults(config::File::with_name(CONFIG_FILE).required(false))
}

fn load_over_defaults<S>(source: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let defaults = config::Config::try_from(&AppConfig::default())?;
    let settings = config::Config::builder()
        .add_source(defaults)
        .add_source(source)
        .build()?;

    Ok(settings.try_deserialize()?)
}
