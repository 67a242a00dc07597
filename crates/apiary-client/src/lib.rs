//! # apiary-client
//!
//! HTTP transport adapter for Apiary endpoints.
//!
//! This crate turns resolved endpoint descriptors into HTTP GET requests and
//! normalizes what comes back:
//! - [`ApiClient::execute`] classifies a request into an [`Outcome`]
//!   (`Success`, `HttpError`, `Failure`)
//! - [`ApiClient::call`] runs the pipeline for an endpoint's kind
//! - [`headlines`] shapes NewsAPI top-headline responses into a table
//!
//! Transport failures keep a fixed message prefix (`Network error:` or
//! `Request error:`) so callers can tell them apart.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod headlines;
pub mod outcome;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::{Error, Result};
pub use outcome::{HttpReply, Outcome};
