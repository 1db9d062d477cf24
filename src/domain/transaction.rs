// Transaction and dataset domain models
use chrono::NaiveDate;

/// One row of the sales file, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub city: String,
    pub gender: String,
    pub payment: String,
    pub product_line: String,
    pub gross_income: f64,
    pub rating: f64,
    pub date: NaiveDate,
}

/// Read-only collection of transactions, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    transactions: Vec<Transaction>,
}

impl Dataset {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct cities in first-appearance order
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for t in &self.transactions {
            if !cities.iter().any(|c| c == &t.city) {
                cities.push(t.city.clone());
            }
        }
        cities
    }
}
