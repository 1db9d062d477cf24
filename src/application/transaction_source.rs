// Source trait for loading the transaction dataset
use crate::domain::transaction::Transaction;
use async_trait::async_trait;

#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Load every transaction; called once at startup
    async fn load_transactions(&self) -> anyhow::Result<Vec<Transaction>>;
}
