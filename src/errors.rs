use thiserror::Error;

/// Error type that captures ledger construction and configuration failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid date `{input}`: {reason}")]
    Format { input: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        LedgerError::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_names_the_input() {
        let err = LedgerError::format("1.2.2019", "expected DD.MM.YYYY");
        assert_eq!(
            err.to_string(),
            "Invalid date `1.2.2019`: expected DD.MM.YYYY"
        );
    }
}
