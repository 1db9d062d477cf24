// Grouped summary domain model
use serde::Serialize;

/// One group: its key values (in `key_columns` order) and the reduced metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub keys: Vec<String>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedSummary {
    pub key_columns: Vec<String>,
    pub value_column: String,
    pub rows: Vec<SummaryRow>,
}

impl GroupedSummary {
    pub fn new(key_columns: &[&str], value_column: &str, rows: Vec<SummaryRow>) -> Self {
        Self {
            key_columns: key_columns.iter().map(|c| c.to_string()).collect(),
            value_column: value_column.to_string(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// The five summaries computed for one render, all reduced with the same operator.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummaries {
    pub by_city: GroupedSummary,
    pub by_gender_city: GroupedSummary,
    pub by_payment: GroupedSummary,
    pub by_date: GroupedSummary,
    pub by_product_city: GroupedSummary,
}

#[cfg(test)]
impl GroupedSummary {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value for an exact key tuple
    pub fn get(&self, keys: &[&str]) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.keys.iter().map(String::as_str).eq(keys.iter().copied()))
            .map(|r| r.value)
    }
}

#[cfg(test)]
impl DashboardSummaries {
    pub fn all(&self) -> [&GroupedSummary; 5] {
        [
            &self.by_city,
            &self.by_gender_city,
            &self.by_payment,
            &self.by_date,
            &self.by_product_city,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GroupedSummary {
        GroupedSummary::new(
            &["Gender", "City"],
            "gross income",
            vec![
                SummaryRow { keys: vec!["Female".into(), "Yangon".into()], value: 3.0 },
                SummaryRow { keys: vec!["Male".into(), "Mandalay".into()], value: 4.0 },
                SummaryRow { keys: vec!["Male".into(), "Yangon".into()], value: 5.0 },
            ],
        )
    }

    #[test]
    fn test_get_by_key_tuple() {
        let summary = sample();
        assert_eq!(summary.get(&["Male", "Yangon"]), Some(5.0));
        assert_eq!(summary.get(&["Female", "Mandalay"]), None);
        assert_eq!(summary.get(&["Male"]), None);
    }
}
