//! Tests for the users service
