//! Scalar statistics over price series: simple and exponential moving averages,
//! relative strength index, plus rounding and number checks.
//!
//! The [`indicators`] and [`numeric`] modules are plain functions with no framework
//! coupling. [`routes::router`] exposes the same operations over HTTP.

pub mod config;
pub mod indicators;
pub mod models;
pub mod numeric;
pub mod routes;
pub mod services;
pub mod state;

pub use indicators::{ema, rsi, sma};
pub use numeric::{is_number, round_to_nearest, DEFAULT_DECIMALS};
