use serde::Serialize;

/// Why a probe attempt produced no HTTP status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeFailure {
    /// The attempt was aborted after exceeding its deadline.
    Timeout,
    /// DNS, connection, TLS or other protocol failure before any status arrived.
    Network,
}

/// Outcome of a single probe invocation. Built fresh per call, never cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    /// True when the target answered with a status in the 200-399 range
    /// (redirects are followed, so a residual 3xx still counts).
    pub up: bool,
    /// HTTP status of the attempt that produced this result, 0 if none.
    pub status_code: u16,
    /// Wall-clock duration of that attempt in milliseconds, 0 if no
    /// attempt completed.
    pub response_time_ms: u64,
    /// Set only when no response was obtained. A target answering with
    /// 404 or 500 is down but not errored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProbeFailure>,
}

impl ProbeResult {
    pub(crate) fn responded(status_code: u16, response_time_ms: u64) -> Self {
        Self {
            up: (200..400).contains(&status_code),
            status_code,
            response_time_ms,
            error: None,
        }
    }

    pub(crate) fn failed(failure: ProbeFailure) -> Self {
        Self {
            up: false,
            status_code: 0,
            response_time_ms: 0,
            error: Some(failure),
        }
    }
}
