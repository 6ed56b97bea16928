//! Integration tests for folio
//!
//! Single test binary; shared fixtures live in `helpers`.

mod helpers;

mod cli_test;
mod console_test;
