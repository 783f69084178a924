//! Shared infrastructure for the checkout feed CLI.

pub mod logging;
