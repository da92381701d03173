mod json;
mod yaml;

use crate::documents::Plan;
use crate::error::PlanError;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON when the text opens with `{` or `[`, YAML otherwise.
    Auto,
    Json,
    Yaml,
}

impl Display for DocumentFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentFormat::Auto => "auto",
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub format: DocumentFormat,
    /// Run the validator after decoding and reject plans with violations.
    pub validate: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Auto,
            validate: false,
        }
    }
}

pub fn decode_plan(input: &str) -> Result<Plan, PlanError> {
    decode_plan_with_options(input, DecodeOptions::default())
}

pub fn decode_plan_with_options(input: &str, options: DecodeOptions) -> Result<Plan, PlanError> {
    let format = match options.format {
        DocumentFormat::Auto if looks_like_json(input) => DocumentFormat::Json,
        DocumentFormat::Auto => DocumentFormat::Yaml,
        explicit => explicit,
    };

    let value = if format == DocumentFormat::Json {
        json::parse_json(input)?
    } else {
        yaml::parse_yaml(input)?
    };

    let plan = serde_json::from_value::<Plan>(value).map_err(|err| PlanError::MalformedInput {
        format,
        message: format!("typed decode failed: {err}"),
    })?;
    tracing::debug!(
        %format,
        instance_groups = plan.instance_groups.len(),
        "decoded plan"
    );

    if options.validate {
        if let Err(error) = plan.validate() {
            tracing::warn!(
                violations = error.violations().len(),
                "decoded plan failed validation"
            );
            return Err(error);
        }
    }

    Ok(plan)
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
