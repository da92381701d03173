use super::DocumentFormat;
use crate::error::PlanError;
use serde_json::Value;

pub fn parse_yaml(input: &str) -> Result<Value, PlanError> {
    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(input).map_err(|err| PlanError::MalformedInput {
            format: DocumentFormat::Yaml,
            message: format!("yaml parse failed: {err}"),
        })?;

    serde_json::to_value(yaml_value).map_err(|err| PlanError::MalformedInput {
        format: DocumentFormat::Yaml,
        message: format!("yaml-to-json conversion failed: {err}"),
    })
}
