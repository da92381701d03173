use crate::documents::Plan;
use serde_json::Value;

pub fn encode_plan(plan: &Plan) -> String {
    serde_json::to_string(plan).expect("plan is serializable")
}

pub fn encode_plan_pretty(plan: &Plan) -> String {
    serde_json::to_string_pretty(plan).expect("plan is serializable")
}

pub fn encode_plan_value(plan: &Plan) -> Value {
    serde_json::to_value(plan).expect("plan is serializable")
}

#[cfg(test)]
#[path = "encode_test.rs"]
mod tests;
