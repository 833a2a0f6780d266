#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::ErrorInfo;

/// Documents shorter than this after trimming are rejected before any network
/// call. The scoring service enforces its own floor as well.
pub const MINIMUM_DOCUMENT_CHARS: usize = 500;

/// Request body for the analyze endpoint. Field names match the wire format.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description_text: String,
}

impl AnalysisRequest {
    pub fn new(resume_text: &str, job_description_text: &str) -> AnalysisRequest {
        return AnalysisRequest {
            resume_text: resume_text.to_string(),
            job_description_text: job_description_text.to_string(),
        };
    }

    /// Checks both documents against the minimum length. All violations are
    /// reported in a single message so the user can fix them in one pass.
    pub fn validate(&self) -> Result<(), ErrorInfo> {
        let mut problems: Vec<String> = vec![];

        if self.resume_text.trim().chars().count() < MINIMUM_DOCUMENT_CHARS {
            problems.push(format!(
                "Resume must be at least {MINIMUM_DOCUMENT_CHARS} characters"
            ));
        }

        if self.job_description_text.trim().chars().count() < MINIMUM_DOCUMENT_CHARS {
            problems.push(format!(
                "Job description must be at least {MINIMUM_DOCUMENT_CHARS} characters"
            ));
        }

        if !problems.is_empty() {
            return Err(ErrorInfo::validation(&problems.join(". ")));
        }

        return Ok(());
    }
}

/// Successful response from the scoring service, passed through unmodified.
/// Unknown response fields are dropped during decoding.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percentage: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

/// A finished analysis together with the documents that produced it, kept so
/// the results panel and the exporters can show and persist the full picture.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedAnalysis {
    pub result: AnalysisResult,
    pub resume_text: String,
    pub job_description_text: String,
    pub finished_at: DateTime<Local>,
}

impl CompletedAnalysis {
    pub fn new(result: AnalysisResult, request: &AnalysisRequest) -> CompletedAnalysis {
        return CompletedAnalysis {
            result,
            resume_text: request.resume_text.to_string(),
            job_description_text: request.job_description_text.to_string(),
            finished_at: Local::now(),
        };
    }
}
