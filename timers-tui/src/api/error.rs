use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by a [`TimerGateway`](super::TimerGateway) call.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to call {call}: {source}")]
    Request {
        call: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{call} returned {status}")]
    Status {
        call: &'static str,
        status: StatusCode,
    },
    #[error("failed to parse {call} response: {source}")]
    Decode {
        call: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
