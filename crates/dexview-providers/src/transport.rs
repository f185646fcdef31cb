use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{Error, Result};

/// How the HTTP transport retries failed requests.
///
/// Retries cover transport errors and 5xx answers only; a 4xx is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub retries: u32,
    /// Back-off unit; attempt `n` waits `n * backoff`
    pub backoff: Duration,
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            retries: 0,
            backoff: Duration::ZERO,
        }
    }

    pub const fn new(retries: u32, backoff: Duration) -> Self {
        Self { retries, backoff }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2, Duration::from_millis(250))
    }
}

/// GET `url` and decode its JSON body, retrying per `policy`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
    policy: RetryPolicy,
) -> Result<T> {
    let mut attempt: u32 = 0;

    loop {
        tracing::debug!(url, attempt, "GET");

        let failure = match http.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return response
                        .json::<T>()
                        .await
                        .map_err(|e| Error::network(url, format!("invalid response body: {}", e)));
                }
                if !status.is_server_error() {
                    return Err(Error::network(url, format!("HTTP {}", status)));
                }
                format!("HTTP {}", status)
            }
            Err(e) => e.to_string(),
        };

        if attempt >= policy.retries {
            return Err(Error::network(url, failure));
        }

        attempt += 1;
        tracing::warn!(url, attempt, reason = %failure, "request failed, retrying");
        tokio::time::sleep(policy.backoff * attempt).await;
    }
}
