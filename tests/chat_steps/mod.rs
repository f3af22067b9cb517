//! Step definitions for chat session behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
