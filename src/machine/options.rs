//! Per-machine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label used in diagnostics when none is configured.
pub const DEFAULT_LABEL: &str = "State Machine";

/// Errors that can occur while loading options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to parse machine options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Machine label must not be empty")]
    EmptyLabel,
}

/// Options controlling how a machine reports its transitions.
///
/// Missing fields fall back to their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Name the machine uses for itself in log lines and errors
    pub label: String,
    /// Log redundant transitions at warn level (debug level otherwise)
    pub warn_on_redundant: bool,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            warn_on_redundant: true,
        }
    }
}

impl MachineOptions {
    pub fn builder() -> MachineOptionsBuilder {
        MachineOptionsBuilder::new()
    }

    /// Parse options from JSON.
    ///
    /// ```rust
    /// use statebus::machine::MachineOptions;
    ///
    /// let options = MachineOptions::from_json(r#"{ "label": "Player" }"#).unwrap();
    /// assert_eq!(options.label, "Player");
    /// assert!(options.warn_on_redundant);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        if options.label.trim().is_empty() {
            return Err(OptionsError::EmptyLabel);
        }
        Ok(options)
    }
}

/// Fluent builder for [`MachineOptions`].
pub struct MachineOptionsBuilder {
    label: Option<String>,
    warn_on_redundant: bool,
}

impl MachineOptionsBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            warn_on_redundant: true,
        }
    }

    /// Set the label used in diagnostics.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Choose whether redundant transitions are logged as warnings.
    pub fn warn_on_redundant(mut self, warn: bool) -> Self {
        self.warn_on_redundant = warn;
        self
    }

    pub fn build(self) -> MachineOptions {
        MachineOptions {
            label: self
                .label
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            warn_on_redundant: self.warn_on_redundant,
        }
    }
}

impl Default for MachineOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
