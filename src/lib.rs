//! Launch records dashboard.
//!
//! The [`data`] module holds the pure part: loading the launch table once,
//! counting outcomes per site and filtering by payload range. [`chart`]
//! turns those results into what the pie and scatter plots draw, and
//! [`state`] recomputes them whenever a widget changes.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
