//! Unit tests for esg-analytics.

mod classification_tests;
mod session_tests;
