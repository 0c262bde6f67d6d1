//! Core data types for Trimquote

pub mod client;
pub mod estimate;
pub mod money;
pub mod prep_level;
