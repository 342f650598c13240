pub mod config;
pub mod constants;
pub mod geo;
pub mod handle;
pub mod viewport;
