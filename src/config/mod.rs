//! Configuration loading and management for the staff calendar.
//!
//! This module loads the application configuration from a YAML file:
//! the database location, the upcoming-events windows and the leave policy.
//!
//! # Example
//!
//! ```no_run
//! use staff_calendar::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/staff-calendar.yaml").unwrap();
//! println!("Result limit: {}", config.events().result_limit);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, EventWindows, LeavePolicy};
