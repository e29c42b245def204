mod client;
mod dev_backend;
mod dto;
mod error;

pub use client::ApiClient;
pub use dev_backend::DevBackend;
pub use error::GatewayError;

use crate::store::GatewayRequest;
use crate::types::{Timer, TimerAttrs, TimerId};
use async_trait::async_trait;

/// The remote timers API: one full-list read and five writes.
#[async_trait]
pub trait TimerGateway: Send + Sync {
    async fn get_timers(&self) -> Result<Vec<Timer>, GatewayError>;
    async fn create_timer(&self, timer: &Timer) -> Result<(), GatewayError>;
    async fn update_timer(&self, attrs: &TimerAttrs) -> Result<(), GatewayError>;
    async fn delete_timer(&self, id: &TimerId) -> Result<(), GatewayError>;
    async fn start_timer(&self, id: &TimerId, start: i64) -> Result<(), GatewayError>;
    async fn stop_timer(&self, id: &TimerId, stop: i64) -> Result<(), GatewayError>;
}

/// Send the server call matching a local mutation.
pub async fn send_request(
    gateway: &dyn TimerGateway,
    request: &GatewayRequest,
) -> Result<(), GatewayError> {
    match request {
        GatewayRequest::Create(timer) => gateway.create_timer(timer).await,
        GatewayRequest::Update(attrs) => gateway.update_timer(attrs).await,
        GatewayRequest::Delete(id) => gateway.delete_timer(id).await,
        GatewayRequest::Start { id, start } => gateway.start_timer(id, *start).await,
        GatewayRequest::Stop { id, stop } => gateway.stop_timer(id, *stop).await,
    }
}
