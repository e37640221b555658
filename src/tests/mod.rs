// Test modules for envelope-assert crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on behavior verification.

// Test helper utilities shared across modules
pub mod helpers;
