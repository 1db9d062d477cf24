// Aggregator - Filter transactions and reduce the active metric per group
use crate::domain::filter::FilterState;
use crate::domain::summary::{DashboardSummaries, GroupedSummary, SummaryRow};
use crate::domain::transaction::{Dataset, Transaction};
use std::collections::BTreeMap;

pub const CITY: &str = "City";
pub const GENDER: &str = "Gender";
pub const PAYMENT: &str = "Payment";
pub const DATE: &str = "Date";
pub const PRODUCT_LINE: &str = "Product line";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A grouping column and how to read it from a transaction
struct KeyColumn {
    name: &'static str,
    extract: fn(&Transaction) -> String,
}

const BY_CITY: &[KeyColumn] = &[KeyColumn { name: CITY, extract: |t| t.city.clone() }];
const BY_GENDER_CITY: &[KeyColumn] = &[
    KeyColumn { name: GENDER, extract: |t| t.gender.clone() },
    KeyColumn { name: CITY, extract: |t| t.city.clone() },
];
const BY_PAYMENT: &[KeyColumn] = &[KeyColumn { name: PAYMENT, extract: |t| t.payment.clone() }];
// ISO dates sort chronologically as strings
const BY_DATE: &[KeyColumn] = &[KeyColumn {
    name: DATE,
    extract: |t| t.date.format(DATE_FORMAT).to_string(),
}];
const BY_PRODUCT_CITY: &[KeyColumn] = &[
    KeyColumn { name: PRODUCT_LINE, extract: |t| t.product_line.clone() },
    KeyColumn { name: CITY, extract: |t| t.city.clone() },
];

/// Compute the five dashboard summaries for the given filter.
pub fn summarize(dataset: &Dataset, filter: &FilterState) -> DashboardSummaries {
    let filtered: Vec<&Transaction> = dataset
        .transactions()
        .iter()
        .filter(|t| filter.cities.contains(&t.city))
        .collect();

    let group = |columns: &[KeyColumn]| group_and_reduce(&filtered, columns, filter);

    DashboardSummaries {
        by_city: group(BY_CITY),
        by_gender_city: group(BY_GENDER_CITY),
        by_payment: group(BY_PAYMENT),
        by_date: group(BY_DATE),
        by_product_city: group(BY_PRODUCT_CITY),
    }
}

fn group_and_reduce(
    rows: &[&Transaction],
    columns: &[KeyColumn],
    filter: &FilterState,
) -> GroupedSummary {
    let metric = filter.metric;
    let reduction = metric.reduction();

    let mut groups: BTreeMap<Vec<String>, Vec<f64>> = BTreeMap::new();
    for t in rows {
        let key = columns.iter().map(|c| (c.extract)(t)).collect();
        groups.entry(key).or_default().push(metric.value_of(t));
    }

    let summary_rows = groups
        .into_iter()
        .map(|(keys, values)| SummaryRow {
            keys,
            value: reduction.apply(&values),
        })
        .collect();

    let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
    GroupedSummary::new(&names, metric.column(), summary_rows)
}
