use thiserror::Error;

/// Errors returned by the statistics stage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The word sequence was empty, so no mean can be computed.
    #[error("text contains no words to count")]
    EmptyText,

    /// Aggregation could not complete (arithmetic overflow).
    #[error("failed to aggregate word lengths: {0}")]
    Processing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(StatsError::EmptyText.to_string(), "text contains no words to count");
        let err = StatsError::Processing("overflow".into());
        assert!(err.to_string().contains("overflow"));
    }
}
