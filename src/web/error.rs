use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::subscriber_client;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("email is missing or empty")]
    EmailNotDefined,
    #[error("provider rejected the subscriber with status: {0}")]
    ProviderRejected(u16),

    #[error("request body is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("subscriber client error: {0}")]
    SubscriberClient(#[from] subscriber_client::Error),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::EmailNotDefined => (StatusCode::UNPROCESSABLE_ENTITY, EmailNotDefined),
            Error::ProviderRejected(_) => (StatusCode::UNPROCESSABLE_ENTITY, CouldNotSubscribe),
            Error::InvalidJson(_) => (StatusCode::BAD_REQUEST, InvalidJson),
            Error::SubscriberClient(subscriber_client::Error::Reqwest(_)) => {
                (StatusCode::BAD_GATEWAY, UpstreamUnavailable)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, ServiceError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// What the caller gets to see, the message ends up in the `error` field of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, derive_more::Display)]
pub enum ClientError {
    #[display("Email is not defined")]
    EmailNotDefined,
    #[display("Could not subscribe")]
    CouldNotSubscribe,
    #[display("Invalid JSON body")]
    InvalidJson,
    #[display("Upstream unavailable")]
    UpstreamUnavailable,
    #[display("Service Error!")]
    ServiceError,
}
