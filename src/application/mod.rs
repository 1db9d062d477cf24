// Application layer - Aggregation, chart mapping and the render use case
pub mod aggregator;
pub mod chart_mapper;
pub mod dashboard_service;
pub mod transaction_source;
