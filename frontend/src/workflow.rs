use shared::PredictionResponse;

pub const ACCEPTED_EXTENSION: &str = ".wav";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid file format. Please upload a .wav audio file.";

// What was being attempted when a failure surfaced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Validation,
    Submission,
    ReportFetch,
}

#[derive(Clone, PartialEq, Debug)]
pub struct WorkflowError {
    pub kind: ErrorKind,
    pub message: String,
}

impl WorkflowError {
    fn validation(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Validation, message: message.into() }
    }

    fn submission(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Submission, message: message.into() }
    }

    fn report_fetch(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::ReportFetch, message: message.into() }
    }
}

/// Identity of one dispatched submission. Tokens increase monotonically, so a
/// response carrying an older token than the current in-flight one is stale
/// and must be dropped instead of applied to a newer recording.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct RequestToken(u64);

#[derive(Clone, PartialEq, Debug)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub handle: F,
}

/// One tagged value for the whole submission lifecycle, so states like
/// "submitting but already holding a result" cannot be constructed.
#[derive(Clone, PartialEq, Debug)]
pub enum Phase<F> {
    Empty,
    FileSelected(SelectedFile<F>),
    Submitting {
        file: SelectedFile<F>,
        token: RequestToken,
    },
    Succeeded {
        file: SelectedFile<F>,
        result: PredictionResponse,
    },
    Failed {
        file: SelectedFile<F>,
        error: WorkflowError,
    },
}

/// The diagnostic workflow controller. Owns the selected recording, the
/// submission lifecycle and every user-facing failure; the rendering layer
/// only reads from it. Generic over the platform file handle (`gloo_file::
/// File` in the app) so the whole machine runs under native `cargo test`.
///
/// Submission failures live inside the `Failed` phase. Validation and
/// report-fetch failures go into `notice`: they are surfaced to the user but
/// deliberately leave the phase alone, since a rejected candidate must not
/// disturb the current file and a failed report download must not invalidate
/// an analysis that already succeeded.
pub struct Workflow<F> {
    phase: Phase<F>,
    notice: Option<WorkflowError>,
    next_token: u64,
}

impl<F> Default for Workflow<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Workflow<F> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Empty,
            notice: None,
            next_token: 0,
        }
    }

    pub fn phase(&self) -> &Phase<F> {
        &self.phase
    }

    pub fn file(&self) -> Option<&SelectedFile<F>> {
        match &self.phase {
            Phase::Empty => None,
            Phase::FileSelected(file)
            | Phase::Submitting { file, .. }
            | Phase::Succeeded { file, .. }
            | Phase::Failed { file, .. } => Some(file),
        }
    }

    pub fn result(&self) -> Option<&PredictionResponse> {
        match &self.phase {
            Phase::Succeeded { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// The failure the user should currently see, if any. A fresh notice
    /// (rejected candidate, failed report fetch) wins over the submission
    /// error baked into a `Failed` phase.
    pub fn visible_error(&self) -> Option<&WorkflowError> {
        if let Some(notice) = &self.notice {
            return Some(notice);
        }
        match &self.phase {
            Phase::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Accepts `candidate` as the recording under analysis. Rejected names
    /// leave the current phase (file, result, error) untouched and only raise
    /// a validation notice; accepted ones replace the phase wholesale, which
    /// atomically drops any previous result or error.
    pub fn select_file(&mut self, name: &str, size: u64, handle: F) -> bool {
        if !name.ends_with(ACCEPTED_EXTENSION) {
            self.notice = Some(WorkflowError::validation(INVALID_FORMAT_MESSAGE));
            return false;
        }
        self.phase = Phase::FileSelected(SelectedFile {
            name: name.to_string(),
            size,
            handle,
        });
        self.notice = None;
        true
    }

    /// Clears the recording and everything tied to it. An unresolved
    /// submission error dies with the file: its lifetime is the file's.
    pub fn remove_file(&mut self) {
        self.phase = Phase::Empty;
        self.notice = None;
    }

    /// Moves `FileSelected` into `Submitting` and hands the caller the file
    /// plus the token the eventual response must present. From any other
    /// phase this is a no-op returning `None`; in particular a second call
    /// while a submission is in flight issues no second request.
    pub fn begin_submission(&mut self) -> Option<(RequestToken, SelectedFile<F>)>
    where
        F: Clone,
    {
        let Phase::FileSelected(file) = &self.phase else {
            return None;
        };
        let file = file.clone();
        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.phase = Phase::Submitting {
            file: file.clone(),
            token,
        };
        self.notice = None;
        Some((token, file))
    }

    /// Applies the outcome of the submission identified by `token`. Whatever
    /// the outcome, a matching token always leaves `Submitting`; a stale or
    /// unknown token changes nothing and reports `false`.
    pub fn finish_submission(
        &mut self,
        token: RequestToken,
        outcome: Result<PredictionResponse, String>,
    ) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Submitting { file, token: current } if current == token => {
                self.phase = match outcome {
                    Ok(result) => Phase::Succeeded { file, result },
                    Err(message) => Phase::Failed {
                        file,
                        error: WorkflowError::submission(message),
                    },
                };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }

    /// The identifier to fetch the report under, available only once an
    /// analysis has succeeded and named one. Callers treat `None` as "nothing
    /// to download" and must not raise an error for it.
    pub fn report_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Succeeded { result, .. } if !result.report_id.is_empty() => {
                Some(&result.report_id)
            }
            _ => None,
        }
    }

    /// Records a failed report download. The analysis result stays valid, so
    /// only the notice changes.
    pub fn report_fetch_failed(&mut self, message: impl Into<String>) {
        self.notice = Some(WorkflowError::report_fetch(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestWorkflow = Workflow<u32>;

    fn sample_result(report_id: &str) -> PredictionResponse {
        PredictionResponse {
            prediction: "Parkinson's Detected".into(),
            probability: 0.82,
            risk_level: "High".into(),
            confidence: "82%".into(),
            report_id: report_id.into(),
        }
    }

    fn workflow_with_file(name: &str) -> TestWorkflow {
        let mut workflow = TestWorkflow::new();
        assert!(workflow.select_file(name, 2_202_009, 1));
        workflow
    }

    #[test]
    fn rejects_non_wav_names_without_touching_the_current_file() {
        let mut workflow = workflow_with_file("voice1.wav");
        assert!(!workflow.select_file("notes.mp3", 512, 2));

        let error = workflow.visible_error().expect("validation error");
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.message, INVALID_FORMAT_MESSAGE);
        assert_eq!(workflow.file().map(|f| f.name.as_str()), Some("voice1.wav"));
    }

    #[test]
    fn rejects_case_mismatched_extension() {
        let mut workflow = TestWorkflow::new();
        assert!(!workflow.select_file("voice1.WAV", 512, 1));
        assert!(workflow.file().is_none());
        assert_eq!(
            workflow.visible_error().map(|e| e.kind),
            Some(ErrorKind::Validation)
        );
    }

    #[test]
    fn rejected_candidate_leaves_a_successful_result_intact() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (token, _) = workflow.begin_submission().unwrap();
        assert!(workflow.finish_submission(token, Ok(sample_result("abc123"))));

        assert!(!workflow.select_file("notes.mp3", 512, 2));

        assert!(workflow.result().is_some());
        assert_eq!(workflow.report_id(), Some("abc123"));
        assert_eq!(workflow.file().map(|f| f.name.as_str()), Some("voice1.wav"));
        let error = workflow.visible_error().expect("validation notice");
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.message, INVALID_FORMAT_MESSAGE);
    }

    #[test]
    fn fresh_validation_notice_outranks_a_submission_error() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (token, _) = workflow.begin_submission().unwrap();
        assert!(workflow.finish_submission(token, Err("service down".into())));

        assert!(!workflow.select_file("notes.mp3", 512, 2));
        let error = workflow.visible_error().expect("validation notice");
        assert_eq!(error.kind, ErrorKind::Validation);
        assert_eq!(error.message, INVALID_FORMAT_MESSAGE);
        // The submission failure is still the phase underneath.
        assert!(matches!(workflow.phase(), Phase::Failed { .. }));
    }

    #[test]
    fn accepting_a_file_clears_previous_result_and_error() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (token, _) = workflow.begin_submission().unwrap();
        assert!(workflow.finish_submission(token, Ok(sample_result("abc123"))));
        assert!(workflow.result().is_some());

        assert!(workflow.select_file("voice2.wav", 1024, 2));
        assert!(workflow.result().is_none());
        assert!(workflow.visible_error().is_none());
        assert!(matches!(workflow.phase(), Phase::FileSelected(_)));
    }

    #[test]
    fn successful_submission_reaches_succeeded() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (token, file) = workflow.begin_submission().unwrap();
        assert_eq!(file.name, "voice1.wav");
        assert!(workflow.is_submitting());

        assert!(workflow.finish_submission(token, Ok(sample_result("abc123"))));
        assert!(!workflow.is_submitting());
        let result = workflow.result().expect("result");
        assert_eq!(result.probability, 0.82);
        assert_eq!(workflow.report_id(), Some("abc123"));
        assert!(workflow.visible_error().is_none());
    }

    #[test]
    fn second_submission_while_in_flight_is_a_no_op() {
        let mut workflow = workflow_with_file("voice1.wav");
        let first = workflow.begin_submission();
        assert!(first.is_some());
        assert!(workflow.begin_submission().is_none());
        assert!(workflow.is_submitting());
    }

    #[test]
    fn failed_submission_reaches_failed_and_never_stays_submitting() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (token, _) = workflow.begin_submission().unwrap();
        assert!(workflow.finish_submission(token, Err("service down".into())));

        assert!(!workflow.is_submitting());
        let error = workflow.visible_error().expect("submission error");
        assert_eq!(error.kind, ErrorKind::Submission);
        assert_eq!(error.message, "service down");
        assert!(workflow.result().is_none());
        // No retry from Failed without re-selecting the file.
        assert!(workflow.begin_submission().is_none());
    }

    #[test]
    fn stale_response_is_dropped_after_file_replacement() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (stale_token, _) = workflow.begin_submission().unwrap();

        assert!(workflow.select_file("voice2.wav", 4096, 2));
        assert!(!workflow.finish_submission(stale_token, Ok(sample_result("old"))));
        assert!(matches!(workflow.phase(), Phase::FileSelected(file) if file.name == "voice2.wav"));
        assert!(workflow.result().is_none());

        let (fresh_token, _) = workflow.begin_submission().unwrap();
        assert!(!workflow.finish_submission(stale_token, Ok(sample_result("old"))));
        assert!(workflow.is_submitting());
        assert!(workflow.finish_submission(fresh_token, Ok(sample_result("new"))));
        assert_eq!(workflow.report_id(), Some("new"));
    }

    #[test]
    fn remove_file_always_returns_to_empty() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (token, _) = workflow.begin_submission().unwrap();
        assert!(workflow.finish_submission(token, Err("service down".into())));

        workflow.remove_file();
        assert!(matches!(workflow.phase(), Phase::Empty));
        assert!(workflow.file().is_none());
        assert!(workflow.result().is_none());
        assert!(workflow.visible_error().is_none());

        // Idempotent from Empty as well.
        workflow.remove_file();
        assert!(matches!(workflow.phase(), Phase::Empty));
    }

    #[test]
    fn report_id_requires_a_successful_result() {
        let mut workflow = TestWorkflow::new();
        assert!(workflow.report_id().is_none());
        assert!(workflow.visible_error().is_none());

        workflow.select_file("voice1.wav", 512, 1);
        assert!(workflow.report_id().is_none());

        let (token, _) = workflow.begin_submission().unwrap();
        workflow.finish_submission(token, Ok(sample_result("")));
        assert!(workflow.report_id().is_none());
        assert!(workflow.visible_error().is_none());
    }

    #[test]
    fn failed_report_fetch_keeps_the_result() {
        let mut workflow = workflow_with_file("voice1.wav");
        let (token, _) = workflow.begin_submission().unwrap();
        workflow.finish_submission(token, Ok(sample_result("xyz")));

        workflow.report_fetch_failed("PDF Report not found");
        let error = workflow.visible_error().expect("report-fetch error");
        assert_eq!(error.kind, ErrorKind::ReportFetch);
        assert!(workflow.result().is_some());
        assert_eq!(workflow.report_id(), Some("xyz"));
    }
}
