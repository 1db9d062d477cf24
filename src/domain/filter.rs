// Filter state rebuilt from the dashboard controls on every interaction
use crate::domain::metric::Metric;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CitySelection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl CitySelection {
    pub fn only<I, S>(cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CitySelection::Only(cities.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, city: &str) -> bool {
        match self {
            CitySelection::All => true,
            CitySelection::Only(cities) => cities.contains(city),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub cities: CitySelection,
    pub metric: Metric,
}

impl FilterState {
    pub fn new(cities: CitySelection, metric: Metric) -> Self {
        Self { cities, metric }
    }
}
