use super::{encode_plan, encode_plan_pretty, encode_plan_value};
use crate::documents::{InstanceGroup, Job, Plan, Properties};
use crate::parse::decode_plan;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn minimal_plan() -> Plan {
    Plan {
        instance_groups: vec![InstanceGroup {
            name: "broker-server".to_string(),
            vm_type: "small".to_string(),
            networks: vec!["broker-network".to_string()],
            instances: 1,
            ..InstanceGroup::default()
        }],
        properties: Properties::new(),
    }
}

fn full_plan() -> Plan {
    let mut plan = minimal_plan();
    let group = &mut plan.instance_groups[0];
    group.persistent_disk_type = "ten".to_string();
    group.azs = vec!["z1".to_string(), "z2".to_string()];
    group.lifecycle = "service".to_string();
    group.jobs = vec![Job {
        name: "kafka".to_string(),
        release: "1.3".to_string(),
        properties: Some([("example_number", json!(2.5))].into_iter().collect()),
    }];
    plan.properties.insert("example", "property");
    plan
}

fn sorted_group_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value["instance_groups"][0]
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

#[test]
fn minimal_plan_omits_optional_fields() {
    assert_eq!(
        encode_plan_value(&minimal_plan()),
        json!({
            "instance_groups": [{
                "name": "broker-server",
                "vm_type": "small",
                "networks": ["broker-network"],
                "instances": 1
            }],
            "properties": {}
        })
    );
}

#[test]
fn empty_properties_are_written_as_object() {
    let text = encode_plan(&minimal_plan());
    assert!(text.ends_with(r#""properties":{}}"#), "{text}");
}

#[test]
fn optional_fields_are_written_when_set() {
    let value = encode_plan_value(&full_plan());
    assert_eq!(
        sorted_group_keys(&value),
        vec![
            "azs",
            "instances",
            "jobs",
            "lifecycle",
            "name",
            "networks",
            "persistent_disk_type",
            "vm_type"
        ]
    );
    assert_eq!(value["instance_groups"][0]["jobs"][0]["properties"], json!({"example_number": 2.5}));
}

#[test]
fn fields_are_emitted_in_declared_order() {
    let text = encode_plan(&full_plan());
    let positions: Vec<usize> = [
        "\"instance_groups\"",
        "\"name\"",
        "\"vm_type\"",
        "\"persistent_disk_type\"",
        "\"networks\"",
        "\"azs\"",
        "\"instances\"",
        "\"lifecycle\"",
        "\"jobs\"",
        "\"release\"",
    ]
    .iter()
    .map(|field| text.find(field).expect("field must be present"))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{text}");
    assert!(text.rfind("\"properties\"") > text.find("\"jobs\""));
}

#[test]
fn absent_job_properties_stay_absent_after_roundtrip() {
    let mut plan = minimal_plan();
    plan.instance_groups[0].jobs = vec![Job {
        name: "kafka".to_string(),
        release: "1.3".to_string(),
        properties: None,
    }];
    let value = encode_plan_value(&plan);
    assert_eq!(value["instance_groups"][0]["jobs"][0]["properties"], Value::Null);
    assert_eq!(decode_plan(&encode_plan(&plan)).expect("must decode"), plan);
}

#[test]
fn decode_of_encode_is_identity() {
    for plan in [minimal_plan(), full_plan()] {
        assert_eq!(decode_plan(&encode_plan(&plan)).expect("must decode"), plan);
        assert_eq!(decode_plan(&encode_plan_pretty(&plan)).expect("must decode"), plan);
    }
}
