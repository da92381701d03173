pub mod documents;
pub mod encode;
pub mod error;
pub mod parse;
pub mod validate;

pub use documents::{InstanceGroup, Job, Plan, Properties};
pub use encode::{encode_plan, encode_plan_pretty, encode_plan_value};
pub use error::PlanError;
pub use parse::{decode_plan, decode_plan_with_options, DecodeOptions, DocumentFormat};
pub use svcplan_core::{FieldPath, FieldPathSegment, Violation};
pub use validate::validate_plan;
