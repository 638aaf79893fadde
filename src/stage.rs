use std::time::Instant;

use tracing::{debug, warn};

use crate::error::FailureKind;

/// Where a request is in the pipeline.
///
/// ```text
/// Created → Resolving → [Fetching] → Tokenizing → Aggregating → Completed
///     └──────────┴───────────┴────────────┴────────────┴──→ Failed(kind)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Created,
    Resolving,
    Fetching,
    Tokenizing,
    Aggregating,
    Completed,
    Failed(FailureKind),
}

impl PipelineStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineStage::Completed | PipelineStage::Failed(_))
    }

    /// Whether moving from `self` to `next` is a legal transition.
    pub fn can_advance_to(self, next: PipelineStage) -> bool {
        use PipelineStage::*;
        match (self, next) {
            (Completed | Failed(_), _) => false,
            (_, Failed(_)) => true,
            (Created, Resolving)
            | (Resolving, Fetching | Tokenizing)
            | (Fetching, Tokenizing)
            | (Tokenizing, Aggregating)
            | (Aggregating, Completed) => true,
            _ => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PipelineStage::Created => "created",
            PipelineStage::Resolving => "resolving",
            PipelineStage::Fetching => "fetching",
            PipelineStage::Tokenizing => "tokenizing",
            PipelineStage::Aggregating => "aggregating",
            PipelineStage::Completed => "completed",
            PipelineStage::Failed(_) => "failed",
        }
    }
}

/// Per-request stage machine. Logs every transition at `debug`.
///
/// Cloning yields a checkpoint that can still record a terminal state if the
/// original is lost to a panicking worker.
#[derive(Debug, Clone)]
pub(crate) struct StageTracker {
    stage: PipelineStage,
    started: Instant,
}

impl StageTracker {
    pub(crate) fn new() -> Self {
        Self {
            stage: PipelineStage::Created,
            started: Instant::now(),
        }
    }

    pub(crate) fn stage(&self) -> PipelineStage {
        self.stage
    }

    pub(crate) fn advance(&mut self, next: PipelineStage) {
        if !self.stage.can_advance_to(next) {
            warn!(from = self.stage.name(), to = next.name(), "illegal stage transition ignored");
            return;
        }
        debug!(
            from = self.stage.name(),
            to = next.name(),
            elapsed_micros = self.started.elapsed().as_micros(),
            "stage_transition"
        );
        self.stage = next;
    }

    pub(crate) fn fail(&mut self, kind: FailureKind) {
        self.advance(PipelineStage::Failed(kind));
    }
}
