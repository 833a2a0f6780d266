use anyhow::Result;
use async_trait::async_trait;

use super::AnalysisRequest;
use super::AnalysisResult;
use super::ErrorInfo;

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the scoring service is reachable before the
    /// user types two documents in.
    async fn health_check(&self) -> Result<()>;

    /// Submits both documents for scoring. Exactly one outbound request per
    /// call, no retries. Every failure mode — connectivity, non-2xx status,
    /// malformed body — comes back as a classified `ErrorInfo`, never as an
    /// unclassified error.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ErrorInfo>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
