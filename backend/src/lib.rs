pub mod config;
pub mod error;
pub mod predictor;
pub mod quality;
pub mod routes;
pub mod server;
pub mod validation;
