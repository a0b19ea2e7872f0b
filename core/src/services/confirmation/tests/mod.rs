//! Tests for the confirmation-code service
