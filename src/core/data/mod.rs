pub mod invocation;
pub mod parameter;
pub mod parameter_id;
