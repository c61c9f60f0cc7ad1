//! Client implementation for the tournament management service.
//!
//! This crate provides the request/response payload types, the error
//! taxonomy, and an HTTP client for driving the tournament REST API:
//! teams, tournaments, groups, team assignment, and match scoring.

pub mod client;
pub mod domain;
pub mod error;
pub mod options;

pub use client::*;
pub use domain::*;
pub use error::*;
pub use options::*;

pub use reqwest::StatusCode;
