//! Submission service test suite
