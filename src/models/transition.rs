use crate::error::TransitionWarning;

/// Result of moving one issue into QA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub key: String,
    /// HTTP status returned by Jira on success.
    pub result: Result<u16, TransitionWarning>,
}

impl TransitionOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-issue outcomes, in the order the transitions were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionReport {
    pub outcomes: Vec<TransitionOutcome>,
}

impl TransitionReport {
    pub fn push(&mut self, outcome: TransitionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    pub fn warnings(&self) -> impl Iterator<Item = (&str, &TransitionWarning)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|w| (o.key.as_str(), w)))
    }
}
