//! Shared fixture values.

/// Registry year used by fixtures unless a test asks for another one.
pub static TEST_YEAR: i32 = 2025;

/// Username used for staff accounts created in tests.
pub static TEST_USERNAME: &str = "operator";
