use serde::{Deserialize, Serialize};

/// Shown in place of the summary whenever the request fails for any reason.
pub const FALLBACK_MESSAGE: &str = "An error occurred while fetching the summary.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Outcome of one submit. Both variants end up as plain text on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryResult {
    Success(String),
    Failure,
}

impl SummaryResult {
    pub fn text(&self) -> &str {
        match self {
            SummaryResult::Success(summary) => summary,
            SummaryResult::Failure => FALLBACK_MESSAGE,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            SummaryResult::Success(summary) => summary,
            SummaryResult::Failure => FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SummaryResult::Failure)
    }
}
