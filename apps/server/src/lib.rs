//! FinWise server library: router, state, config, and auth are exposed so
//! integration tests can drive the app in-process.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
