// CSV-backed transaction source
use crate::application::transaction_source::TransactionSource;
use crate::domain::transaction::Transaction;
use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: cannot parse date {value:?} with any of {formats:?}")]
    InvalidDate {
        row: usize,
        value: String,
        formats: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct CsvTransactionRepository {
    path: PathBuf,
    date_formats: Vec<String>,
}

/// Columns the dashboard reads; any other columns in the file are ignored
#[derive(Debug, Deserialize)]
struct TransactionRow {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Payment")]
    payment: String,
    #[serde(rename = "Product line")]
    product_line: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "gross income")]
    gross_income: f64,
    #[serde(rename = "Rating")]
    rating: f64,
}

impl CsvTransactionRepository {
    pub fn new(path: impl Into<PathBuf>, date_formats: Vec<String>) -> Self {
        Self {
            path: path.into(),
            date_formats,
        }
    }

    fn read_file(&self) -> anyhow::Result<Vec<Transaction>> {
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("Failed to open dataset {}", self.path.display()))?;
        parse_transactions(file, &self.date_formats)
            .with_context(|| format!("Failed to load dataset {}", self.path.display()))
    }
}

#[async_trait]
impl TransactionSource for CsvTransactionRepository {
    async fn load_transactions(&self) -> anyhow::Result<Vec<Transaction>> {
        let repo = self.clone();
        tokio::task::spawn_blocking(move || repo.read_file())
            .await
            .context("Dataset loader task panicked")?
    }
}

/// Parse transactions from delimited text with a header row
pub fn parse_transactions<R: Read>(
    reader: R,
    date_formats: &[String],
) -> Result<Vec<Transaction>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for (idx, row) in reader.deserialize::<TransactionRow>().enumerate() {
        let row = row?;
        let date = parse_date(&row.date, date_formats).ok_or_else(|| DatasetError::InvalidDate {
            row: idx + 1,
            value: row.date.clone(),
            formats: date_formats.to_vec(),
        })?;

        transactions.push(Transaction {
            city: row.city,
            gender: row.gender,
            payment: row.payment,
            product_line: row.product_line,
            gross_income: row.gross_income,
            rating: row.rating,
            date,
        });
    }

    tracing::debug!("Parsed {} transactions", transactions.len());
    Ok(transactions)
}

fn parse_date(value: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
}
