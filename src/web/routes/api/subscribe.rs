use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use crate::{
    web::{
        types::{SubscriptionOutcome, SubscriptionRequest},
        Error, Result,
    },
    AppState,
};

/// Provider answers that count as a successful subscription.
const ACCEPTED_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

/// The body is read as JSON whatever the `Content-Type` says.
#[tracing::instrument(name = "Forwarding new subscriber", skip(app_state, body))]
pub async fn subscribe(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SubscriptionOutcome>)> {
    let request = SubscriptionRequest::from_json(&body)?;
    let email = request.email()?;

    let response = app_state.subscriber_client.submit(email).await?;

    if !ACCEPTED_STATUSES.contains(&response.status) {
        debug!("{:<12} - provider body: {}", "SUBSCRIBE", response.body);
        return Err(Error::ProviderRejected(response.status.as_u16()));
    }

    info!("New subscriber successfully handed over to the provider.");

    Ok((StatusCode::CREATED, Json(SubscriptionOutcome::ok())))
}
