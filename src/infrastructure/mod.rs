// Infrastructure layer - Configuration, file loading and HTTP encoding
pub mod config;
pub mod csv_repository;
pub mod http_response;
