use std::time::{Duration, Instant};

use reqwest::{StatusCode, redirect};
use thiserror::Error;
use url::Url;

use super::result::{ProbeFailure, ProbeResult};

/// Rejected before any network activity. The only condition a caller sees
/// as a hard error; everything the target does is a [`ProbeResult`].
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("invalid url: {0}")]
    Malformed(#[from] url::ParseError),
    #[error("unsupported scheme '{0}', expected http or https")]
    UnsupportedScheme(String),
}

/// On-demand availability checker. One HEAD attempt, one conditional GET
/// fallback, each bound to its own timeout window. No retries beyond that.
#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
    attempt_timeout: Duration,
}

impl Prober {
    pub fn new(user_agent: &str, attempt_timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            attempt_timeout,
        })
    }

    /// Probe a target URL once. Never hangs past roughly two timeout
    /// windows, and never errors for target-side failures.
    pub async fn probe(&self, url: &str) -> Result<ProbeResult, ProbeError> {
        let target = validate_target(url)?;

        // HEAD first; plenty of servers reject it while accepting GET.
        let start = Instant::now();
        match self
            .client
            .head(target.clone())
            .timeout(self.attempt_timeout)
            .send()
            .await
        {
            Ok(resp) if !head_unsupported(resp.status()) => {
                return Ok(ProbeResult::responded(
                    resp.status().as_u16(),
                    elapsed_ms(start),
                ));
            }
            // The server answered but HEAD is off the table, retry as GET.
            Ok(_) => {}
            // Target is already known slow; a GET would only double the wait.
            Err(err) if err.is_timeout() => {
                return Ok(ProbeResult::failed(ProbeFailure::Timeout));
            }
            Err(_) => {}
        }

        let start = Instant::now();
        match self
            .client
            .get(target)
            .timeout(self.attempt_timeout)
            .send()
            .await
        {
            Ok(resp) => Ok(ProbeResult::responded(
                resp.status().as_u16(),
                elapsed_ms(start),
            )),
            Err(err) if err.is_timeout() => Ok(ProbeResult::failed(ProbeFailure::Timeout)),
            Err(_) => Ok(ProbeResult::failed(ProbeFailure::Network)),
        }
    }
}

fn validate_target(raw: &str) -> Result<Url, ProbeError> {
    let parsed = Url::parse(raw)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ProbeError::UnsupportedScheme(other.to_string())),
    }
}

fn head_unsupported(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED
    )
}

fn elapsed_ms(start: Instant) -> u64 {
    // A completed attempt reports at least 1ms so that 0 stays reserved
    // for "no response obtained".
    (start.elapsed().as_millis() as u64).max(1)
}
