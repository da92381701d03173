use crate::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One structural defect found while validating a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted identifier of the failed check, e.g. `job.release.non_empty`.
    pub rule: String,
    pub field_path: FieldPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    pub message: String,
}

impl Violation {
    pub fn new(rule: &str, field_path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            field_path,
            instance_group: None,
            job: None,
            message: message.into(),
        }
    }

    /// Attaches the enclosing instance group name. Empty names are not recorded.
    pub fn in_instance_group(mut self, name: &str) -> Self {
        self.instance_group = non_empty(name);
        self
    }

    /// Attaches the enclosing job name. Empty names are not recorded.
    pub fn in_job(mut self, name: &str) -> Self {
        self.job = non_empty(name);
        self
    }
}

fn non_empty(name: &str) -> Option<String> {
    (!name.is_empty()).then(|| name.to_string())
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

#[cfg(test)]
#[path = "violation_test.rs"]
mod tests;
