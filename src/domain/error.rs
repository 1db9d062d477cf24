// Errors raised by domain validation
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("unknown metric {0:?}, expected \"gross income\" or \"Rating\"")]
    UnknownMetric(String),
}
