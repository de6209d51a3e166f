//! Integration test harness
//!
//! One binary for all integration tests; each file covers one area.

mod helpers;

mod cli_test;
mod grid_test;
mod html_test;
mod menu_test;
mod sauce_test;
