mod plan;

pub use plan::validate_plan;
