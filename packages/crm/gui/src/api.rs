use hcp_crm_core::config::{self, ClientConfig};
use hcp_crm_core::types::*;
use hcp_crm_core::RequestError;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// HTTP client for the interactions backend. Cheap to clone; every effect
/// task gets its own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_interactions(&self, limit: u32) -> Result<Vec<Interaction>, RequestError> {
        self.get(&config::list_path(limit)).await
    }

    pub async fn get_interaction(&self, id: &InteractionId) -> Result<Interaction, RequestError> {
        self.get(&config::interaction_path(id)).await
    }

    pub async fn create_interaction(
        &self,
        payload: &NewInteraction,
    ) -> Result<CreateInteractionResponse, RequestError> {
        self.post(config::INTERACTIONS_PATH, payload).await
    }

    pub async fn process_text(&self, text: String) -> Result<ExtractedInteraction, RequestError> {
        self.post(config::PROCESS_TEXT_PATH, &ProcessTextRequest { text })
            .await
    }

    pub async fn health(&self) -> Result<HealthResponse, RequestError> {
        self.get(config::HEALTH_PATH).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.url(path);
        log_debug!("api", "GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        decode(&url, resp).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log_debug!("api", "POST {}", url);

        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        decode(&url, resp).await
    }
}

async fn decode<T: DeserializeOwned>(url: &str, resp: Response) -> Result<T, RequestError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let error = RequestError::from_response(status.as_u16(), &body);
        log_warn!("api", "{} failed with {}: {}", url, status, body);
        return Err(error);
    }

    resp.json::<T>().await.map_err(|e| {
        if e.is_timeout() {
            RequestError::Timeout
        } else {
            log_error!("api", "could not decode response from {}: {}", url, e);
            RequestError::Decode(e.to_string())
        }
    })
}

fn transport_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        log_warn!("api", "request timed out: {}", err);
        RequestError::Timeout
    } else {
        log_warn!("api", "transport error: {}", err);
        RequestError::Transport(err.to_string())
    }
}
