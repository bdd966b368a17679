use super::protocol::*;
use super::store::KeyValueStore;
use crate::error::StoreError;

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Client for a standalone store node.
///
/// Every call carries its own deadline and is retried with exponential
/// backoff plus jitter before the store is reported unavailable.
pub struct RemoteStore {
    http_client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    attempts: usize,
}

impl RemoteStore {
    pub fn new(base_url: &str, timeout: Duration, attempts: usize) -> Result<Self, StoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StoreError::Protocol(format!("invalid store url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::Protocol(format!(
                "store url '{}' cannot be a base",
                base_url
            )));
        }

        Ok(Self {
            http_client: reqwest::Client::new(),
            base_url,
            timeout,
            attempts: attempts.max(1),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }

    async fn post_with_retry<T: serde::Serialize>(
        &self,
        url: Url,
        payload: &T,
    ) -> Result<reqwest::Response, StoreError> {
        let mut delay_ms = 150u64;

        for attempt in 0..self.attempts {
            let response = self
                .http_client
                .post(url.clone())
                .json(payload)
                .timeout(self.timeout)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == self.attempts {
                        return Err(StoreError::Unavailable(e.to_string()));
                    }
                    tracing::debug!("POST {} failed (attempt {}): {}", url, attempt + 1, e);
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(StoreError::Unavailable("retry attempts exhausted".to_string()))
    }

    async fn get_with_retry(&self, url: Url) -> Result<reqwest::Response, StoreError> {
        let mut delay_ms = 150u64;

        for attempt in 0..self.attempts {
            let response = self
                .http_client
                .get(url.clone())
                .timeout(self.timeout)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == self.attempts {
                        return Err(StoreError::Unavailable(e.to_string()));
                    }
                    tracing::debug!("GET {} failed (attempt {}): {}", url, attempt + 1, e);
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(StoreError::Unavailable("retry attempts exhausted".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for RemoteStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut url = self.endpoint(&[ENDPOINT_GET.trim_start_matches('/')]);
        url.query_pairs_mut().append_pair("key", key);
        let response = self.get_with_retry(url).await?;

        // Absent keys come back as 200 with no value, so any 404 is a routing problem.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::Protocol(format!(
                "store node has no {} endpoint at {}",
                ENDPOINT_GET, self.base_url
            )));
        }
        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "GET request failed {}",
                response.status()
            )));
        }

        let body: GetResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Protocol(e.to_string()))?;
        Ok(body.value)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let url = self.endpoint(&[ENDPOINT_PUT.trim_start_matches('/')]);
        let payload = PutRequest {
            key: key.to_string(),
            value,
        };
        let response = self.post_with_retry(url, &payload).await?;

        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "PUT request failed {}",
                response.status()
            )));
        }

        let ack: PutResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Protocol(e.to_string()))?;
        if !ack.success {
            return Err(StoreError::Unavailable(format!("store rejected key '{}'", key)));
        }
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let segments: Vec<&str> = ENDPOINT_KEYS.trim_start_matches('/').split('/').collect();
        let url = self.endpoint(&segments);
        let response = self.get_with_retry(url).await?;

        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "key listing failed {}",
                response.status()
            )));
        }

        let body: KeysResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Protocol(e.to_string()))?;
        Ok(body.keys)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let url = self.endpoint(&[ENDPOINT_HEALTH.trim_start_matches('/')]);
        let response = self.get_with_retry(url).await?;
        if !response.status().is_success() {
            return Err(StoreError::Unavailable(format!(
                "health check failed {}",
                response.status()
            )));
        }
        Ok(())
    }
}
