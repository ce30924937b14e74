#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod types;

pub use commands::usage::{check_and_print_usage, check_usage_to};
pub use error::UsageError;
