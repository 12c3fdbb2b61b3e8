pub mod artifacts;
pub mod fetch;
