mod plan;
mod properties;

pub use plan::{InstanceGroup, Job, Plan};
pub use properties::Properties;
