//! CLI command implementations.

pub(crate) mod compare;
pub(crate) mod presets;
pub(crate) mod size;

pub(crate) use compare::CompareArgs;
pub(crate) use presets::PresetsArgs;
pub(crate) use size::SizeArgs;
