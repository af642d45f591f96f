//! Process exit codes
//!
//! These values are the public contract with CI pipelines and must not change.

/// Run completed with no failures
pub const SUCCESS: i32 = 0;

/// Collection file does not exist
pub const MISSING_COLLECTION: i32 = 1;

/// The runner reported an execution error
pub const RUN_ERROR: i32 = 2;

/// One or more assertions failed during the run
pub const ASSERTION_FAILURES: i32 = 3;

/// An input document or the config file could not be read or parsed
pub const INVALID_INPUT: i32 = 4;
