pub mod config;
pub mod constants;
pub mod fuel;
pub mod functions;
pub mod models;
