//! Spawns the whole app on a random port, with MailerLite replaced by a `wiremock` server.
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::OnceLock,
    time::Duration,
};

use anyhow::Result;
use secrecy::SecretString;
use signup_relay::{config::ProviderCredentials, init_dbg_tracing, App, AppState, MailerLiteClient};
use tokio::net::TcpListener;
use tracing::info;
use wiremock::MockServer;

pub const TEST_GROUP_ID: &str = "42";
pub const TEST_API_TOKEN: &str = "test-api-token";

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

/// Set `TEST_LOG` to see the app logs while testing.
fn init_test_subscriber() {
    static SUBSCRIBER: OnceLock<()> = OnceLock::new();
    SUBSCRIBER.get_or_init(|| {
        if std::env::var("TEST_LOG").is_ok() {
            init_dbg_tracing();
        }
    });
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub http_client: reqwest::Client,
    pub provider_server: MockServer,
}

impl TestApp {
    /// A helper function that spawns a separate task to serve our app.
    pub async fn spawn() -> Result<Self> {
        init_test_subscriber();

        let provider_server = MockServer::start().await;
        let credentials = ProviderCredentials {
            group_id: TEST_GROUP_ID.to_string(),
            api_token: SecretString::from(TEST_API_TOKEN.to_string()),
        };
        let subscriber_client = MailerLiteClient::new(
            format!("{}/api/2/", provider_server.uri()),
            credentials,
            Some(Duration::from_millis(200)),
        )?;
        let app_state = AppState::new(subscriber_client);

        let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;
        info!("Listening on {addr}");

        tokio::spawn(signup_relay::serve(App::new(app_state, listener)));

        Ok(TestApp {
            addr,
            http_client: reqwest::Client::new(),
            provider_server,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub async fn post_subscribe(&self, body: &serde_json::Value) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(self.url("/api/subscribe"))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    pub async fn post_subscribe_raw(&self, body: &'static str) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(self.url("/api/subscribe"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Ok(res)
    }
}
