//! Async REST client for the clinic records backend.
//!
//! One GET per collection; `patient_records` issues both concurrently since
//! the sources are independent. This layer only fetches and decodes, it
//! never builds timeline events.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;
use crate::models::{Appointment, HistoryRecord};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Records service is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Records service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Response parsing error: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Connection settings, injected by the caller.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout_secs: config::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Both record collections for one patient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientRecords {
    pub appointments: Vec<Appointment>,
    pub history: Vec<HistoryRecord>,
}

/// HTTP client for the records API.
pub struct RecordsClient {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl RecordsClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Local development backend with the default timeout.
    pub fn default_local() -> Result<Self, FetchError> {
        Self::new(&ClientConfig::default())
    }

    pub async fn appointments(&self, patient_id: i64) -> Result<Vec<Appointment>, FetchError> {
        self.get_collection(&format!("patients/{patient_id}/appointments"))
            .await
    }

    pub async fn history(&self, patient_id: i64) -> Result<Vec<HistoryRecord>, FetchError> {
        self.get_collection(&format!("patients/{patient_id}/history"))
            .await
    }

    /// Fetches both collections concurrently. Fails if either request fails;
    /// callers that can render a partial timeline fetch the two separately.
    pub async fn patient_records(&self, patient_id: i64) -> Result<PatientRecords, FetchError> {
        let (appointments, history) =
            tokio::try_join!(self.appointments(patient_id), self.history(patient_id))?;
        Ok(PatientRecords {
            appointments,
            history,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_collection<T>(&self, path: &str) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                FetchError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                FetchError::Timeout(self.timeout_secs)
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
