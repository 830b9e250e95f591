pub mod app_state;
pub mod cors;
pub mod errors;
pub mod telemetry;
