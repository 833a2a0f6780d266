use super::AnalysisRequest;

/// Requests from the UI to the actions worker.
pub enum Action {
    Analyze(AnalysisRequest),
    DismissError(),
    ExportResult(),
}
