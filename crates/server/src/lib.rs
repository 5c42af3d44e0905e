pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;

pub use startup::run_with_config;
