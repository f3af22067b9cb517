//! Step definitions for task submission behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
