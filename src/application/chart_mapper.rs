// Chart mapper - Turns grouped summaries into bar chart specifications
use crate::application::aggregator::{CITY, DATE, GENDER, PAYMENT, PRODUCT_LINE};
use crate::domain::chart::{BarMode, ChartId, ChartKind, ChartSpec, Orientation};
use crate::domain::dashboard::DashboardCharts;
use crate::domain::summary::{DashboardSummaries, GroupedSummary};
use crate::infrastructure::config::ChartsConfig;

#[derive(Debug, Clone)]
pub struct ChartMapper {
    charts_config: ChartsConfig,
}

impl ChartMapper {
    pub fn new(charts_config: ChartsConfig) -> Self {
        Self { charts_config }
    }

    pub fn map_all(&self, summaries: DashboardSummaries) -> DashboardCharts {
        DashboardCharts::new(
            self.city_chart(summaries.by_city),
            self.payment_chart(summaries.by_payment),
            self.gender_chart(summaries.by_gender_city),
            self.date_chart(summaries.by_date),
            self.product_chart(summaries.by_product_city),
        )
    }

    pub fn city_chart(&self, summary: GroupedSummary) -> ChartSpec {
        let value = summary.value_column.clone();
        self.bar(ChartId::City, Orientation::Vertical, CITY, &value, None, summary)
    }

    pub fn payment_chart(&self, summary: GroupedSummary) -> ChartSpec {
        let value = summary.value_column.clone();
        self.bar(ChartId::Payment, Orientation::Horizontal, &value, PAYMENT, None, summary)
    }

    pub fn gender_chart(&self, summary: GroupedSummary) -> ChartSpec {
        let value = summary.value_column.clone();
        self.bar(ChartId::Gender, Orientation::Vertical, GENDER, &value, Some(CITY), summary)
    }

    pub fn date_chart(&self, summary: GroupedSummary) -> ChartSpec {
        let value = summary.value_column.clone();
        self.bar(ChartId::IncomePerDate, Orientation::Vertical, DATE, &value, None, summary)
    }

    pub fn product_chart(&self, summary: GroupedSummary) -> ChartSpec {
        let value = summary.value_column.clone();
        self.bar(
            ChartId::IncomePerProduct,
            Orientation::Horizontal,
            &value,
            PRODUCT_LINE,
            Some(CITY),
            summary,
        )
    }

    fn bar(
        &self,
        id: ChartId,
        orientation: Orientation,
        x: &str,
        y: &str,
        color: Option<&str>,
        data: GroupedSummary,
    ) -> ChartSpec {
        // Colored series sit side by side rather than stacked
        let bar_mode = if color.is_some() {
            BarMode::Group
        } else {
            BarMode::Relative
        };

        ChartSpec {
            id,
            kind: ChartKind::Bar,
            orientation,
            bar_mode,
            x: x.to_string(),
            y: y.to_string(),
            color: color.map(str::to_string),
            data,
            layout: self.charts_config.layout_for(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::SummaryRow;

    fn mapper() -> ChartMapper {
        ChartMapper::new(ChartsConfig::default())
    }

    fn summary(columns: &[&str]) -> GroupedSummary {
        let keys = columns.iter().map(|c| format!("{c} value")).collect();
        GroupedSummary::new(columns, "gross income", vec![SummaryRow { keys, value: 1.0 }])
    }

    #[test]
    fn test_city_chart_is_vertical() {
        let chart = mapper().city_chart(summary(&[CITY]));
        assert_eq!(chart.id, ChartId::City);
        assert_eq!(chart.orientation, Orientation::Vertical);
        assert_eq!(chart.x, "City");
        assert_eq!(chart.y, "gross income");
        assert_eq!(chart.color, None);
        assert_eq!(chart.layout.height, 200);
    }

    #[test]
    fn test_payment_chart_is_horizontal() {
        let chart = mapper().payment_chart(summary(&[PAYMENT]));
        assert_eq!(chart.orientation, Orientation::Horizontal);
        assert_eq!(chart.x, "gross income");
        assert_eq!(chart.y, "Payment");
    }

    #[test]
    fn test_gender_chart_groups_by_city() {
        let chart = mapper().gender_chart(summary(&[GENDER, CITY]));
        assert_eq!(chart.x, "Gender");
        assert_eq!(chart.color.as_deref(), Some("City"));
        assert_eq!(chart.bar_mode, BarMode::Group);
    }

    #[test]
    fn test_product_chart_layout_override() {
        let chart = mapper().product_chart(summary(&[PRODUCT_LINE, CITY]));
        assert_eq!(chart.orientation, Orientation::Horizontal);
        assert_eq!(chart.y, "Product line");
        assert_eq!(chart.x, "gross income");
        assert_eq!(chart.color.as_deref(), Some("City"));
        assert_eq!(chart.bar_mode, BarMode::Group);
        assert_eq!(chart.layout.height, 300);
        assert_eq!(chart.layout.margin.b, 10);
    }

    #[test]
    fn test_date_chart_binds_date_axis() {
        let chart = mapper().date_chart(summary(&[DATE]));
        assert_eq!(chart.id, ChartId::IncomePerDate);
        assert_eq!(chart.x, "Date");
        assert_eq!(chart.bar_mode, BarMode::Relative);
    }

    #[test]
    fn test_empty_summary_maps_to_empty_chart() {
        let empty = GroupedSummary::new(&[CITY], "Rating", Vec::new());
        let chart = mapper().city_chart(empty);
        assert!(chart.data.is_empty());
        assert_eq!(chart.y, "Rating");
    }

    #[test]
    fn test_chart_serializes_bindings() {
        let chart = mapper().gender_chart(summary(&[GENDER, CITY]));
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["id"], "gender");
        assert_eq!(json["kind"], "bar");
        assert_eq!(json["bar_mode"], "group");
        assert_eq!(json["color"], "City");
        assert_eq!(json["data"]["key_columns"][1], "City");
        assert_eq!(json["layout"]["margin"]["t"], 20);
    }
}
