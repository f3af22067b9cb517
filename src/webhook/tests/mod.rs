//! Unit tests for webhook payloads, failure handling, and the scripted client.

mod failure_tests;
mod scripted_client_tests;
