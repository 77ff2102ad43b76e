//! Generic workflow state machine.
//!
//! All console workflows share the same lifecycle: a readiness guard on
//! the input, a busy flag while the gateway call is in flight, then
//! either a result or a fixed fallback message. One parametric slice
//! type covers every workflow instead of three copies of the logic.

pub mod bridge;

use tracing::warn;

use crate::core::models::{BrainstormRequest, BrandDocumentInput, CopyRequest, VisionInput};
use crate::errors::BackendError;

/// Readiness guard for a workflow input: submission is a no-op until
/// the required field is filled.
pub trait SubmitInput {
    fn is_ready(&self) -> bool;
}

impl SubmitInput for CopyRequest {
    fn is_ready(&self) -> bool {
        !self.topic.is_empty()
    }
}

impl SubmitInput for VisionInput {
    fn is_ready(&self) -> bool {
        self.image.is_some()
    }
}

impl SubmitInput for BrainstormRequest {
    fn is_ready(&self) -> bool {
        !self.idea.is_empty()
    }
}

impl SubmitInput for BrandDocumentInput {
    fn is_ready(&self) -> bool {
        self.document.is_some()
    }
}

/// State owned by a single workflow: the partially-filled input, the
/// in-flight flag, and the outcome of the most recent submission.
///
/// `busy` and a just-set `result`/`last_error` are mutually exclusive:
/// a slice is in flight, holding a result, holding an error, or idle.
#[derive(Debug, Clone)]
pub struct WorkflowSlice<Req, Res> {
    pub input: Req,
    pub busy: bool,
    pub result: Option<Res>,
    pub last_error: Option<String>,
}

impl<Req: Default, Res> Default for WorkflowSlice<Req, Res> {
    fn default() -> Self {
        Self {
            input: Req::default(),
            busy: false,
            result: None,
            last_error: None,
        }
    }
}

impl<Req, Res> WorkflowSlice<Req, Res>
where
    Req: SubmitInput + Clone,
{
    /// Start a submission. Returns `None` (and changes nothing) when
    /// the input guard fails; otherwise clears the previous outcome,
    /// raises `busy`, and returns the captured payload for the gateway
    /// call. Field edits made after this point only affect the next
    /// submission.
    ///
    /// There is deliberately no busy-guard: submitting again while a
    /// call is in flight fires a second independent request, and
    /// whichever response lands last wins.
    pub fn begin_submit(&mut self) -> Option<Req> {
        if !self.input.is_ready() {
            return None;
        }
        self.result = None;
        self.last_error = None;
        self.busy = true;
        Some(self.input.clone())
    }

    /// Apply the outcome of a gateway call. A failure stores the
    /// workflow's fixed `fallback` message, never the raw error text.
    pub fn finish_submit(&mut self, outcome: Result<Res, BackendError>, fallback: &str) {
        self.busy = false;
        match outcome {
            Ok(res) => {
                self.result = Some(res);
                self.last_error = None;
            }
            Err(err) => {
                warn!("Workflow request failed: {err}");
                self.result = None;
                self.last_error = Some(fallback.to_string());
            }
        }
    }
}
