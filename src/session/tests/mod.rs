//! Unit tests for session state primitives.
