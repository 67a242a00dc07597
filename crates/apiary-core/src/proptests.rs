//! Property-based tests for resolution and projection.
