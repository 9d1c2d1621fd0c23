//! Domain error types.

/// Top-level error type for stocklens.
#[derive(Debug, thiserror::Error)]
pub enum StocklensError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("provider {provider} failed: {reason}")]
    Provider { provider: String, reason: String },

    #[error("invalid series for {symbol}: {reason}")]
    Series { symbol: String, reason: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error("chart error: {reason}")]
    Chart { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&StocklensError> for std::process::ExitCode {
    fn from(err: &StocklensError) -> Self {
        let code: u8 = match err {
            StocklensError::Io(_) => 1,
            StocklensError::ConfigParse { .. }
            | StocklensError::ConfigMissing { .. }
            | StocklensError::ConfigInvalid { .. } => 2,
            StocklensError::Provider { .. } | StocklensError::Series { .. } => 3,
            StocklensError::Report { .. } | StocklensError::Chart { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = StocklensError::ConfigMissing {
            section: "analysis".into(),
            key: "symbols".into(),
        };
        assert_eq!(err.to_string(), "missing config key [analysis] symbols");

        let err = StocklensError::Provider {
            provider: "primary".into(),
            reason: "file unreadable".into(),
        };
        assert_eq!(err.to_string(), "provider primary failed: file unreadable");
    }
}
