// Dashboard service - Use case for rendering the five charts
use crate::application::aggregator::summarize;
use crate::application::chart_mapper::ChartMapper;
use crate::application::transaction_source::TransactionSource;
use crate::domain::dashboard::DashboardCharts;
use crate::domain::filter::{CitySelection, FilterState};
use crate::domain::metric::Metric;
use crate::domain::transaction::Dataset;
use crate::infrastructure::config::ChartsConfig;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ControlOption {
    pub label: String,
    pub value: String,
}

/// Options and defaults for the city checklist and metric selector.
#[derive(Debug, Clone, Serialize)]
pub struct Controls {
    pub cities: Vec<ControlOption>,
    pub selected_cities: Vec<String>,
    pub metrics: Vec<ControlOption>,
    pub selected_metric: Metric,
}

#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<Dataset>,
    mapper: ChartMapper,
}

impl DashboardService {
    pub fn new(dataset: Arc<Dataset>, charts_config: ChartsConfig) -> Self {
        Self {
            dataset,
            mapper: ChartMapper::new(charts_config),
        }
    }

    /// Load the dataset once from `source`; an empty dataset is a startup failure
    pub async fn load(
        source: &dyn TransactionSource,
        charts_config: ChartsConfig,
    ) -> anyhow::Result<Self> {
        let dataset = Dataset::new(source.load_transactions().await?);
        if dataset.is_empty() {
            anyhow::bail!("dataset contains no transactions");
        }

        tracing::info!(
            "Loaded {} transactions across {} cities",
            dataset.len(),
            dataset.cities().len()
        );

        Ok(Self::new(Arc::new(dataset), charts_config))
    }

    /// Recompute all five charts for the current control state
    pub fn render(&self, filter: &FilterState) -> DashboardCharts {
        let summaries = summarize(&self.dataset, filter);

        tracing::debug!(
            "Rendering metric={} cities={:?}: {} city groups, {} date groups",
            filter.metric,
            filter.cities,
            summaries.by_city.len(),
            summaries.by_date.len()
        );

        self.mapper.map_all(summaries)
    }

    pub fn controls(&self) -> Controls {
        let cities = self.dataset.cities();
        Controls {
            cities: cities
                .iter()
                .map(|c| ControlOption {
                    label: c.clone(),
                    value: c.clone(),
                })
                .collect(),
            selected_cities: cities,
            metrics: Metric::ALL
                .into_iter()
                .map(|m| ControlOption {
                    label: m.label().to_string(),
                    value: m.column().to_string(),
                })
                .collect(),
            selected_metric: Metric::default(),
        }
    }

    /// Build a filter from raw control values; absent values fall back to the control defaults
    pub fn filter_from_controls(
        cities: Option<Vec<String>>,
        metric: Option<&str>,
    ) -> Result<FilterState, crate::domain::error::DashboardError> {
        let metric = match metric {
            Some(raw) => raw.parse()?,
            None => Metric::default(),
        };
        let cities = match cities {
            Some(list) => CitySelection::only(list),
            None => CitySelection::All,
        };
        Ok(FilterState::new(cities, metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartId;
    use crate::domain::error::DashboardError;
    use crate::domain::transaction::{Transaction, fixtures};
    use async_trait::async_trait;

    struct StaticSource(Vec<Transaction>);

    #[async_trait]
    impl TransactionSource for StaticSource {
        async fn load_transactions(&self) -> anyhow::Result<Vec<Transaction>> {
            Ok(self.0.clone())
        }
    }

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(fixtures::mixed()), ChartsConfig::default())
    }

    #[test]
    fn test_render_order() {
        let charts = service().render(&FilterState::default());
        let ids: Vec<ChartId> = charts.charts.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![
                ChartId::City,
                ChartId::Payment,
                ChartId::Gender,
                ChartId::IncomePerDate,
                ChartId::IncomePerProduct,
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let service = service();
        let filter = FilterState::new(CitySelection::only(["Yangon", "Mandalay"]), Metric::Rating);
        assert_eq!(service.render(&filter), service.render(&filter));
    }

    #[test]
    fn test_render_empty_selection() {
        let filter = FilterState::new(CitySelection::only(Vec::<String>::new()), Metric::GrossIncome);
        let charts = service().render(&filter);
        assert!(charts.charts.iter().all(|c| c.data.is_empty()));
    }

    #[test]
    fn test_render_scenario_values() {
        let service = DashboardService::new(Arc::new(fixtures::scenario()), ChartsConfig::default());

        let income = service.render(&FilterState::default());
        assert_eq!(income.charts[0].data.get(&["Yangon"]), Some(30.0));
        assert_eq!(income.charts[0].data.get(&["Naypyitaw"]), Some(5.0));

        let rating = service.render(&FilterState::new(CitySelection::All, Metric::Rating));
        assert_eq!(rating.charts[0].data.get(&["Yangon"]), Some(5.0));
        assert_eq!(rating.charts[0].data.get(&["Naypyitaw"]), Some(8.0));
        assert_eq!(rating.charts[1].x, "Rating");
    }

    #[test]
    fn test_controls_defaults() {
        let controls = service().controls();
        assert_eq!(controls.selected_cities, vec!["Yangon", "Naypyitaw", "Mandalay"]);
        assert_eq!(controls.cities.len(), 3);
        assert_eq!(controls.metrics[0].label, "Gross Income");
        assert_eq!(controls.metrics[0].value, "gross income");
        assert_eq!(controls.metrics[1].value, "Rating");
        assert_eq!(controls.selected_metric, Metric::GrossIncome);
    }

    #[test]
    fn test_filter_from_controls() {
        let filter = DashboardService::filter_from_controls(None, None).unwrap();
        assert_eq!(filter, FilterState::default());

        let filter =
            DashboardService::filter_from_controls(Some(vec!["Yangon".into()]), Some("Rating")).unwrap();
        assert_eq!(filter.cities, CitySelection::only(["Yangon"]));
        assert_eq!(filter.metric, Metric::Rating);

        let err = DashboardService::filter_from_controls(None, Some("")).unwrap_err();
        assert_eq!(err, DashboardError::UnknownMetric(String::new()));
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let source = StaticSource(fixtures::scenario().transactions().to_vec());
        let service = DashboardService::load(&source, ChartsConfig::default())
            .await
            .unwrap();
        let charts = service.render(&FilterState::default());
        assert_eq!(charts.charts[0].data.get(&["Yangon"]), Some(30.0));
        assert_eq!(charts.charts[0].data.len(), 2);
    }

    #[tokio::test]
    async fn test_load_rejects_empty_source() {
        let source = StaticSource(Vec::new());
        let result = DashboardService::load(&source, ChartsConfig::default()).await;
        assert!(result.is_err());
    }
}
