use crate::config::GlobalConfig;
use crate::driver_api::{DriverApi, ACCEPT_ORDER_PATH, RECEIVE_LOCATION_PATH};
use crate::dtos::requests::{AcceptOrderRequest, ReceiveLocationRequest};
use crate::dtos::responses::{AcceptOrderResponse, ErrorResponseBody, ReceiveLocationResponse};
use crate::rest::middlewares::SessionMiddleware;
use crate::result::error::{RequestError, Result};
use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const APPLICATION_JSON: &str = "application/json";

/// [`DriverApi`] over HTTP. Requests are sent once; there is no retry middleware.
pub struct HttpDriverApi {
    origin: String,
    http_client: ClientWithMiddleware,
}

impl HttpDriverApi {
    pub fn new(config: &GlobalConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if let Some(cookie) = &config.session_cookie {
            builder = builder.with(SessionMiddleware::new(cookie)?);
        }

        Ok(Self::with_client(config.origin(), builder.build()))
    }

    pub fn with_client(origin: impl Into<String>, http_client: ClientWithMiddleware) -> Self {
        Self {
            origin: origin.into().trim_end_matches('/').to_owned(),
            http_client,
        }
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.origin);
        let payload = serde_json::to_vec(body).map_err(|e| {
            RequestError::RequestFailed(anyhow!(e).context(format!("Error serializing POST {path}")))
        })?;

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(payload)
            .send()
            .await?;

        let response_status = response.status();
        let response_body = response.text().await?;

        if !response_status.is_success() {
            return Err(match ErrorResponseBody::parse(&response_body) {
                Some(error_body) => RequestError::RequestFailed(anyhow!(
                    "POST {path} failed with status {}. Error: {:?}",
                    response_status,
                    error_body
                )),
                None => RequestError::RequestFailed(anyhow!(
                    "POST {path} failed with status {}. Response: {}",
                    response_status,
                    response_body
                )),
            });
        }

        serde_json::from_str(&response_body).map_err(|e| {
            RequestError::RequestFailed(anyhow!(e).context(format!(
                "Error deserializing POST {path} response: {response_body}"
            )))
        })
    }
}

#[async_trait]
impl DriverApi for HttpDriverApi {
    async fn accept_order(&self, request: &AcceptOrderRequest) -> Result<AcceptOrderResponse> {
        self.post_json(ACCEPT_ORDER_PATH, request).await
    }

    async fn report_location(
        &self,
        request: &ReceiveLocationRequest,
    ) -> Result<ReceiveLocationResponse> {
        self.post_json(RECEIVE_LOCATION_PATH, request).await
    }
}
