//! Property-based tests for the renderer.
