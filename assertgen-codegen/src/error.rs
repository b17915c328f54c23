use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{ConversionError, TypeResolutionError};

/// Error produced by a generator, boxed so any generator's error fits.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The step of a run that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Resolve,
    Convert,
    GenerateAssertion,
    GenerateEntryPoint,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Resolve => "resolve",
            Step::Convert => "convert",
            Step::GenerateAssertion => "generate assertion",
            Step::GenerateEntryPoint => "generate entry point",
        })
    }
}

/// The terminal error of a run.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to resolve the requested types")]
    Resolution(#[from] TypeResolutionError),

    #[error("failed to describe '{type_name}'")]
    Conversion {
        type_name: String,
        #[source]
        source: ConversionError,
    },

    #[error("failed to generate assertions for '{type_name}'")]
    Assertion {
        type_name: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to generate the assertions entry point")]
    EntryPoint {
        #[source]
        source: BoxError,
    },
}

impl GenerationError {
    pub fn step(&self) -> Step {
        match self {
            GenerationError::Resolution(_) => Step::Resolve,
            GenerationError::Conversion { .. } => Step::Convert,
            GenerationError::Assertion { .. } => Step::GenerateAssertion,
            GenerationError::EntryPoint { .. } => Step::GenerateEntryPoint,
        }
    }

    /// The type being processed when a per-type step failed.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            GenerationError::Conversion { type_name, .. }
            | GenerationError::Assertion { type_name, .. } => Some(type_name),
            _ => None,
        }
    }

    /// Messages of this error and each of its sources, outermost first.
    pub fn chain(&self) -> Vec<String> {
        std::iter::successors(Some(self as &dyn std::error::Error), |e| e.source())
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_and_type_name() {
        let err = GenerationError::from(TypeResolutionError::TypeNotFound("p1.Nope".into()));
        assert_eq!(err.step(), Step::Resolve);
        assert_eq!(err.type_name(), None);

        let err = GenerationError::Assertion {
            type_name: "p1.Employee".into(),
            source: "disk full".into(),
        };
        assert_eq!(err.step(), Step::GenerateAssertion);
        assert_eq!(err.type_name(), Some("p1.Employee"));
    }

    #[test]
    fn test_chain() {
        let err = GenerationError::from(TypeResolutionError::TypeNotFound("p1.Nope".into()));
        assert_eq!(
            err.chain(),
            [
                "failed to resolve the requested types",
                "type 'p1.Nope' could not be found",
            ]
        );
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::GenerateEntryPoint.to_string(), "generate entry point");
        assert_eq!(
            serde_json::to_string(&Step::GenerateAssertion).unwrap(),
            "\"generate_assertion\""
        );
    }
}
