pub mod serve;

// re-export
pub use serve::{router, serve};

use std::sync::Arc;

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{config::AppConfig, MailerLiteClient, Result, SubscriberClient};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let mailerlite_config = &config.mailerlite_config;
        let subscriber_client = MailerLiteClient::new(
            &mailerlite_config.base_url,
            config.credentials(),
            mailerlite_config.timeout(),
        )?;

        let app_state = AppState::new(subscriber_client);

        let listener = TcpListener::bind(config.net_config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub subscriber_client: Box<dyn SubscriberClient>,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(subscriber_client: impl SubscriberClient + 'static) -> Self {
        AppState(Arc::new(InternalState {
            subscriber_client: Box::new(subscriber_client),
        }))
    }
}
