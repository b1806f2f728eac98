//! A small HTTP relay that hands newsletter signups over to MailerLite,
//! so the API token never has to reach the browser.

pub mod app;
pub mod config;
mod error;
pub mod subscriber_client;
pub mod web;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

// re-export
pub use app::{serve, App, AppState};
pub use error::{Error, Result};
pub use subscriber_client::{MailerLiteClient, ProviderResponse, SubscriberClient};

/// Human readable console output, `RUST_LOG` overrides the default `debug` level.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .compact()
        .init();
}

/// JSON lines, `RUST_LOG` overrides the default `info` level.
pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
