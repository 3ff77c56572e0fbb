mod db;
mod http;
mod monitoring;

pub use monitoring::MonitoringConfig;

pub use db::DatabaseConfig;
pub use http::server::HttpServerConfig;
