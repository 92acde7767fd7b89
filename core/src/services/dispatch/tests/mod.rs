//! Tests for the dispatch pipeline
