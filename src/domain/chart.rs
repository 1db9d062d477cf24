// Declarative chart specifications consumed by the rendering layer
use crate::domain::summary::GroupedSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    City,
    Payment,
    Gender,
    IncomePerDate,
    IncomePerProduct,
}

impl ChartId {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartId::City => "city",
            ChartId::Payment => "payment",
            ChartId::Gender => "gender",
            ChartId::IncomePerDate => "income_per_date",
            ChartId::IncomePerProduct => "income_per_product",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// How bars sharing a category are placed: stacked (`Relative`) or side by side (`Group`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Relative,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartLayout {
    pub template: String,
    pub height: u32,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    pub orientation: Orientation,
    pub bar_mode: BarMode,
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: GroupedSummary,
    pub layout: ChartLayout,
}
