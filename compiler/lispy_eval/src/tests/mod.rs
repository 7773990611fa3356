//! Test suites kept out of the implementation files.
