//! Workflow configuration.
//!
//! Defaults leave authorization off and keep the LC where it is when export
//! documents arrive. Override via environment variables or the `with_*`
//! builders.

/// Behaviour switches for [`TradeFinanceWorkflow`](crate::TradeFinanceWorkflow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkflowConfig {
    /// Check the caller's role on every guarded operation.
    pub enforce_authorization: bool,
    /// Move the LC to `PAYMENT_DUE_FROM_IB_TO_EB` when export documents
    /// are submitted, in the same saga as the documents.
    ///
    /// Off by default: `submit_ed` stores the documents and leaves the LC
    /// status alone, so the importer's bank must call `accept_to_pay` to
    /// make payment due.
    pub advance_lc_on_submission: bool,
}

impl WorkflowConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `TFX_ENFORCE_AUTHORIZATION` (default: `false`)
    /// - `TFX_ADVANCE_LC_ON_SUBMISSION` (default: `false`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            enforce_authorization: env_flag("TFX_ENFORCE_AUTHORIZATION")?,
            advance_lc_on_submission: env_flag("TFX_ADVANCE_LC_ON_SUBMISSION")?,
        })
    }

    pub fn with_authorization(mut self, enforce: bool) -> Self {
        self.enforce_authorization = enforce;
        self
    }

    pub fn with_lc_advance_on_submission(mut self, advance: bool) -> Self {
        self.advance_lc_on_submission = advance;
        self
    }
}

fn env_flag(var: &str) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_flag(var, &raw),
        Err(_) => Ok(false),
    }
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(var.to_string(), raw.to_string())),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid boolean for {0}: {1:?}")]
    InvalidFlag(String, String),
}
