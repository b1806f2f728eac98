//! Request and response bodies of the web layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::web::Error;

// ###################################
// ->   STRUCTS
// ###################################
/// Body of `POST /api/subscribe`. Any other field is ignored.
#[derive(Debug, Deserialize)]
pub struct SubscriptionRequest {
    pub email: Option<String>,
}

/// The only thing a subscription attempt ever answers with.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SubscriptionOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub ok: bool,
}

/// Body of every unmatched route, uses `message` instead of `error`.
#[derive(Debug, Serialize)]
pub struct NotFound {
    pub message: &'static str,
    pub ok: bool,
}

// ###################################
// ->   IMPLs
// ###################################
impl SubscriptionRequest {
    /// Only a JSON object is accepted, a derived struct would also take the array form.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        let body: Map<String, Value> = serde_json::from_slice(body)?;
        let request = serde_json::from_value(Value::Object(body))?;
        Ok(request)
    }

    /// A missing, `null` or empty email is rejected, anything else goes.
    pub fn email(&self) -> Result<&str, Error> {
        match self.email.as_deref() {
            None | Some("") => Err(Error::EmailNotDefined),
            Some(email) => Ok(email),
        }
    }
}

impl SubscriptionOutcome {
    pub fn ok() -> Self {
        SubscriptionOutcome {
            error: None,
            ok: true,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        SubscriptionOutcome {
            error: Some(error.into()),
            ok: false,
        }
    }
}

impl Default for NotFound {
    fn default() -> Self {
        NotFound {
            message: "Not Found",
            ok: false,
        }
    }
}
