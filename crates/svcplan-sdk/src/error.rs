use crate::parse::DocumentFormat;
use svcplan_core::Violation;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The text is not well-formed, or a field holds a value of the wrong type.
    #[error("malformed {format} plan input: {message}")]
    MalformedInput {
        format: DocumentFormat,
        message: String,
    },
    /// The plan decoded but is missing required data. Carries every violation found.
    #[error(
        "plan validation failed with {} violation(s):\n{}",
        .violations.len(),
        render_violations(.violations)
    )]
    ValidationFailure { violations: Vec<Violation> },
}

impl PlanError {
    pub fn violations(&self) -> &[Violation] {
        match self {
            PlanError::MalformedInput { .. } => &[],
            PlanError::ValidationFailure { violations } => violations,
        }
    }
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("  - {violation}"))
        .collect::<Vec<_>>()
        .join("\n")
}
