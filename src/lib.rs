pub mod cli;
pub mod client;
pub mod config;
pub mod dates;
pub mod errors;
pub mod models;
pub mod report;
pub mod runner;

pub use client::EventsClient;
pub use config::SmokeConfig;
pub use errors::{FailureKind, SmokeError, SmokeResult};
pub use models::{Envelope, Event, Pagination};
pub use runner::{run_basic, run_paginated, Outcome, RunSummary};
