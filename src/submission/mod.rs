pub mod dto;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::{Client, StatusCode};

use crate::config::FormConfig;
use crate::error::{ConfigError, SubmitError};
use crate::models::{Receipt, RequestPayload};

#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, payload: &RequestPayload) -> Result<Receipt, SubmitError>;
}

/// Picks the transport described by `config`: HTTP when an endpoint is set,
/// otherwise the simulated one.
pub fn client_from_config(config: &FormConfig) -> Result<Arc<dyn SubmissionClient>, ConfigError> {
    match &config.submit_url {
        Some(url) => {
            let client = HttpSubmissionClient::new(url.clone(), config.request_timeout)?;
            Ok(Arc::new(client))
        }
        None => {
            tracing::warn!("SUBMIT_URL is not set; requests are simulated and never leave this machine");
            Ok(Arc::new(SimulatedSubmissionClient::new(
                config.simulated_delay,
                config.simulated_failure_rate,
            )))
        }
    }
}

pub struct HttpSubmissionClient {
    client: Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn submit(&self, payload: &RequestPayload) -> Result<Receipt, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Idempotency-Key", payload.request_id.to_string())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::info!("submission endpoint responded {}", status);

        if status.is_success() {
            return dto::parse_receipt(&body);
        }

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(SubmitError::Rejected {
                    status: status.as_u16(),
                    message: dto::rejection_message(&body),
                })
            }
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => Err(SubmitError::Timeout),
            _ => {
                tracing::warn!("submission failed with {}: {}", status, body);
                Err(SubmitError::Server(status.as_u16()))
            }
        }
    }
}

/// Stand-in transport: waits, then fails at random with the configured rate.
pub struct SimulatedSubmissionClient {
    delay: Duration,
    failure_rate: f64,
    rng: Mutex<StdRng>,
}

impl SimulatedSubmissionClient {
    pub fn new(delay: Duration, failure_rate: f64) -> Self {
        Self::with_rng(delay, failure_rate, StdRng::from_entropy())
    }

    pub fn seeded(delay: Duration, failure_rate: f64, seed: u64) -> Self {
        Self::with_rng(delay, failure_rate, StdRng::seed_from_u64(seed))
    }

    fn with_rng(delay: Duration, failure_rate: f64, rng: StdRng) -> Self {
        Self {
            delay,
            failure_rate: if failure_rate.is_nan() {
                0.0
            } else {
                failure_rate.clamp(0.0, 1.0)
            },
            rng: Mutex::new(rng),
        }
    }

    fn roll_failure(&self) -> bool {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_bool(self.failure_rate),
            Err(poisoned) => poisoned.into_inner().gen_bool(self.failure_rate),
        }
    }
}

#[async_trait]
impl SubmissionClient for SimulatedSubmissionClient {
    async fn submit(&self, payload: &RequestPayload) -> Result<Receipt, SubmitError> {
        let fails = self.roll_failure();
        tokio::time::sleep(self.delay).await;

        if fails {
            tracing::warn!("simulated submission {} failed", payload.request_id);
            Err(SubmitError::Failed("simulated failure".to_string()))
        } else {
            tracing::info!("simulated submission {} accepted", payload.request_id);
            Ok(Receipt::default())
        }
    }
}

pub struct NoopSubmissionClient;

#[async_trait]
impl SubmissionClient for NoopSubmissionClient {
    async fn submit(&self, _payload: &RequestPayload) -> Result<Receipt, SubmitError> {
        Ok(Receipt::default())
    }
}
