//! Unit tests for the application context.
