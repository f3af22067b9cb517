//! Unit tests for the task domain and submission service.
