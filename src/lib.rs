// src/lib.rs
// =============================================================================
// Library root for link-sieve.
//
// The whole program is one linear pipeline:
//   validate URL -> fetch page -> extract links -> check links -> write files
//
// main.rs only parses arguments and sets up logging; everything else lives
// here so that the integration tests in tests/ can drive the pipeline
// directly.
// =============================================================================

pub mod app;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod validator;

pub use app::{run, Outcome, Report};
pub use config::Config;
