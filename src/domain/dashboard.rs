// Dashboard domain model
use super::chart::ChartSpec;
use serde::Serialize;

/// The five charts of one render, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub charts: [ChartSpec; 5],
}

impl DashboardCharts {
    pub fn new(
        city: ChartSpec,
        payment: ChartSpec,
        gender: ChartSpec,
        income_per_date: ChartSpec,
        income_per_product: ChartSpec,
    ) -> Self {
        Self {
            charts: [city, payment, gender, income_per_date, income_per_product],
        }
    }
}
