#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use super::normalize;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AnalysisRequest;
use crate::domain::models::AnalysisResult;
use crate::domain::models::Backend;
use crate::domain::models::ErrorInfo;

/// HTTP client for the resume scoring service.
pub struct Matcher {
    url: String,
    timeout: String,
}

impl Default for Matcher {
    fn default() -> Matcher {
        return Matcher {
            url: Config::get(ConfigKey::ServiceURL),
            timeout: Config::get(ConfigKey::ServiceHealthCheckTimeout),
        };
    }
}

#[async_trait]
impl Backend for Matcher {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        let res = reqwest::Client::new()
            .get(format!("{url}/health", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "scoring service is not running");
            bail!("The scoring service is not running");
        }

        let res = res.unwrap();
        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "scoring service health check failed"
            );
            bail!("Scoring service health check failed");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ErrorInfo> {
        let res = reqwest::Client::new()
            .post(format!("{url}/analyze", url = self.url))
            .json(request)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "analyze request got no response");
                return Err(normalize::classify_transport(&err, &self.url));
            }
        };

        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();

        if !(200..300).contains(&status) {
            tracing::error!(status, "analyze request was rejected");
            return Err(normalize::classify_response(status, &body));
        }

        match serde_json::from_str::<AnalysisResult>(&body) {
            Ok(result) => {
                tracing::debug!(match_percentage = result.match_percentage, "analysis response");
                return Ok(result);
            }
            Err(err) => {
                tracing::error!(error = ?err, "analyze response body did not decode");
                return Err(normalize::classify_decode(&err));
            }
        }
    }
}
