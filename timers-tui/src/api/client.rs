use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{DeleteTimerRequest, StartTimerRequest, StopTimerRequest, UpdateTimerRequest};
use super::{GatewayError, TimerGateway};
use crate::types::{Timer, TimerAttrs, TimerId};

const TIMERS_PATH: &str = "/api/timers";
const START_PATH: &str = "/api/timers/start";
const STOP_PATH: &str = "/api/timers/stop";

/// HTTP implementation of [`TimerGateway`] against the timers JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, GatewayError> {
        let trimmed = base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed).map_err(|source| GatewayError::InvalidUrl {
            url: trimmed.to_string(),
            source,
        })?;

        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|source| GatewayError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                source,
            })
    }

    async fn send(
        &self,
        request: RequestBuilder,
        call: &'static str,
    ) -> Result<Response, GatewayError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| GatewayError::Request { call, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status { call, status });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call: &'static str,
    ) -> Result<T, GatewayError> {
        let response = self.send(request, call).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| GatewayError::Decode { call, source })
    }

    async fn send_without_body(
        &self,
        request: RequestBuilder,
        call: &'static str,
    ) -> Result<(), GatewayError> {
        let response = self.send(request, call).await?;
        let _ = response.bytes().await;
        Ok(())
    }
}

#[async_trait]
impl TimerGateway for ApiClient {
    async fn get_timers(&self) -> Result<Vec<Timer>, GatewayError> {
        self.get_json(
            self.client.get(self.endpoint(TIMERS_PATH)?),
            "GET /api/timers",
        )
        .await
    }

    async fn create_timer(&self, timer: &Timer) -> Result<(), GatewayError> {
        self.send_without_body(
            self.client.post(self.endpoint(TIMERS_PATH)?).json(timer),
            "POST /api/timers",
        )
        .await
    }

    async fn update_timer(&self, attrs: &TimerAttrs) -> Result<(), GatewayError> {
        self.send_without_body(
            self.client
                .put(self.endpoint(TIMERS_PATH)?)
                .json(&UpdateTimerRequest {
                    id: attrs.id.as_str(),
                    title: &attrs.title,
                    project: &attrs.project,
                }),
            "PUT /api/timers",
        )
        .await
    }

    async fn delete_timer(&self, id: &TimerId) -> Result<(), GatewayError> {
        self.send_without_body(
            self.client
                .delete(self.endpoint(TIMERS_PATH)?)
                .json(&DeleteTimerRequest { id: id.as_str() }),
            "DELETE /api/timers",
        )
        .await
    }

    async fn start_timer(&self, id: &TimerId, start: i64) -> Result<(), GatewayError> {
        self.send_without_body(
            self.client
                .post(self.endpoint(START_PATH)?)
                .json(&StartTimerRequest {
                    id: id.as_str(),
                    start,
                }),
            "POST /api/timers/start",
        )
        .await
    }

    async fn stop_timer(&self, id: &TimerId, stop: i64) -> Result<(), GatewayError> {
        self.send_without_body(
            self.client
                .post(self.endpoint(STOP_PATH)?)
                .json(&StopTimerRequest {
                    id: id.as_str(),
                    stop,
                }),
            "POST /api/timers/stop",
        )
        .await
    }
}
