//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod robots;
pub mod sensors;
pub mod state;
pub mod stats;
pub mod tasks;
pub mod validation;

pub use error::ApiResult;
