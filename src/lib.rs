pub mod branch;
pub mod config;
pub mod error;
pub mod git;
pub mod markers;
pub mod resolver;
pub mod ui;
pub mod version;

pub use error::{GitSemverError, Result};
pub use resolver::{VersionInfo, VersionResolver};
