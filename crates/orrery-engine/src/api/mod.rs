pub mod setup;
pub mod types;
