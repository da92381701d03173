use crate::documents::{InstanceGroup, Job, Plan};
use crate::error::PlanError;
use svcplan_core::{FieldPath, Violation};

impl Plan {
    /// Checks every required field of the plan, its instance groups and their jobs.
    pub fn validate(&self) -> Result<(), PlanError> {
        let violations = validate_plan(self);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(PlanError::ValidationFailure { violations })
        }
    }
}

/// Walks the plan depth first and returns every violation in discovery order:
/// group order, then field checks within a group, then jobs within a group.
pub fn validate_plan(plan: &Plan) -> Vec<Violation> {
    let mut violations = Vec::new();
    let groups_path = FieldPath::root().key("instance_groups");

    if plan.instance_groups.is_empty() {
        violations.push(Violation::new(
            "plan.instance_groups.non_empty",
            groups_path,
            "plan must contain at least one instance group",
        ));
    } else {
        for (index, group) in plan.instance_groups.iter().enumerate() {
            validate_instance_group(group, groups_path.index(index), &mut violations);
        }
    }

    tracing::debug!(
        instance_groups = plan.instance_groups.len(),
        violations = violations.len(),
        "plan validation finished"
    );
    violations
}

fn validate_instance_group(group: &InstanceGroup, path: FieldPath, violations: &mut Vec<Violation>) {
    let mut push = |rule: &str, field: &str, message: String| {
        violations.push(Violation::new(rule, path.key(field), message).in_instance_group(&group.name));
    };

    if group.name.is_empty() {
        push(
            "instance_group.name.non_empty",
            "name",
            "instance group name must not be empty".to_string(),
        );
    }
    if group.vm_type.is_empty() {
        push(
            "instance_group.vm_type.non_empty",
            "vm_type",
            "instance group vm_type must not be empty".to_string(),
        );
    }
    if group.networks.is_empty() {
        push(
            "instance_group.networks.non_empty",
            "networks",
            "instance group must be attached to at least one network".to_string(),
        );
    }
    if group.instances < 1 {
        push(
            "instance_group.instances.positive",
            "instances",
            format!("instance group instances must be at least 1, got {}", group.instances),
        );
    }

    let jobs_path = path.key("jobs");
    for (index, job) in group.jobs.iter().enumerate() {
        validate_job(job, &group.name, jobs_path.index(index), violations);
    }
}

fn validate_job(job: &Job, group_name: &str, path: FieldPath, violations: &mut Vec<Violation>) {
    let mut push = |rule: &str, field: &str, message: &str| {
        violations.push(
            Violation::new(rule, path.key(field), message)
                .in_instance_group(group_name)
                .in_job(&job.name),
        );
    };

    if job.name.is_empty() {
        push("job.name.non_empty", "name", "job name must not be empty");
    }
    if job.release.is_empty() {
        push("job.release.non_empty", "release", "job release must not be empty");
    }
    if job.properties.is_none() {
        push(
            "job.properties.present",
            "properties",
            "job properties must be present (use an empty object for none)",
        );
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
