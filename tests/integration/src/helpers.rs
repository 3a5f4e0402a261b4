//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use pianodir_api::{create_app, create_app_state};
use pianodir_common::{AppConfig, DatabaseConfig, RateLimitConfig, StorageBackend};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server over the in-memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server over PostgreSQL (requires DATABASE_URL)
    pub async fn start_postgres() -> Result<Self> {
        let mut config = test_config();
        config.storage.backend = StorageBackend::Postgres;
        config.storage.database = Some(DatabaseConfig {
            url: std::env::var("DATABASE_URL")?,
            max_connections: 5,
            min_connections: 1,
            run_migrations: true,
        });
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request as a user
    pub async fn get_as(&self, path: &str, user_id: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header(USER_ID_HEADER, user_id)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with JSON body as a user
    pub async fn post_as<T: Serialize>(
        &self,
        path: &str,
        user_id: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header(USER_ID_HEADER, user_id)
            .json(body)
            .send()
            .await?)
    }

    /// Make a body-less POST request, optionally as a user
    pub async fn post_empty(&self, path: &str, user_id: Option<&str>) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let mut request = self.client.post(&url);
        if let Some(user_id) = user_id {
            request = request.header(USER_ID_HEADER, user_id);
        }
        Ok(request.send().await?)
    }
}

/// In-memory configuration with a rate limit tests never hit
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::in_memory(0);
    config.rate_limit = RateLimitConfig {
        requests_per_second: 1000,
        burst: 1000,
    };
    config
}

/// Helper to check if a PostgreSQL test database is available
pub fn check_postgres_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
