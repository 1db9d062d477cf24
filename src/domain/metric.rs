// Analysis metric and its reduction operator
use crate::domain::error::DashboardError;
use crate::domain::transaction::Transaction;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    GrossIncome,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Sum,
    Mean,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::GrossIncome, Metric::Rating];

    /// Column name, also the value sent by the metric selector
    pub fn column(self) -> &'static str {
        match self {
            Metric::GrossIncome => "gross income",
            Metric::Rating => "Rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::GrossIncome => "Gross Income",
            Metric::Rating => "Rating",
        }
    }

    pub fn reduction(self) -> Reduction {
        match self {
            Metric::GrossIncome => Reduction::Sum,
            Metric::Rating => Reduction::Mean,
        }
    }

    pub fn value_of(self, transaction: &Transaction) -> f64 {
        match self {
            Metric::GrossIncome => transaction.gross_income,
            Metric::Rating => transaction.rating,
        }
    }
}

impl FromStr for Metric {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.column() == s)
            .ok_or_else(|| DashboardError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.column())
    }
}

impl Reduction {
    /// Reduce a non-empty group of values
    pub fn apply(self, values: &[f64]) -> f64 {
        let sum: f64 = values.iter().sum();
        match self {
            Reduction::Sum => sum,
            Reduction::Mean => sum / values.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric() {
        assert_eq!("gross income".parse::<Metric>(), Ok(Metric::GrossIncome));
        assert_eq!("Rating".parse::<Metric>(), Ok(Metric::Rating));
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for bad in ["", "rating", "Gross Income", "Total"] {
            assert_eq!(
                bad.parse::<Metric>(),
                Err(DashboardError::UnknownMetric(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_reduction_selection() {
        assert_eq!(Metric::GrossIncome.reduction(), Reduction::Sum);
        assert_eq!(Metric::Rating.reduction(), Reduction::Mean);
    }

    #[test]
    fn test_reduction_apply() {
        assert_eq!(Reduction::Sum.apply(&[10.0, 20.0]), 30.0);
        assert_eq!(Reduction::Mean.apply(&[4.0, 6.0]), 5.0);
        assert_eq!(Reduction::Mean.apply(&[8.0]), 8.0);
    }
}
