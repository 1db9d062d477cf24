// Domain layer - Data types with no I/O
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod metric;
pub mod summary;
pub mod transaction;
