use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ApiError, ValidationErrors};
use crate::config::ApiConfig;

/// JSON client for the catalog REST API.
///
/// Thin wrapper over `reqwest`: joins paths onto the configured base
/// URL and maps failure responses into the `ApiError` taxonomy.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Network(e.to_string()));
        }

        Err(Self::classify(status, response).await)
    }

    /// Map a failure response onto the error taxonomy.
    ///
    /// A 400 whose body carries field errors becomes `Validation`, so
    /// server-side and locally-synthesized validation render the same.
    async fn classify(status: StatusCode, response: Response) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::BAD_REQUEST => {
                let errors = response
                    .json::<ValidationErrors>()
                    .await
                    .unwrap_or_default();
                if errors.is_empty() {
                    ApiError::BadRequest {
                        status: status.as_u16(),
                    }
                } else {
                    ApiError::Validation(errors)
                }
            }
            _ => ApiError::BadRequest {
                status: status.as_u16(),
            },
        }
    }
}
