//! Unit tests for the chat domain and session service.
