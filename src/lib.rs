//! Rent proration service
//!
//! This crate prorates a monthly rent over the days of a calendar month that
//! fall inside a tenant's occupancy period, and serves the calculation over
//! a small JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
