pub mod commit;
pub mod config;
pub mod emoji;
pub mod error;
pub mod git;
pub mod manifest;
pub mod notes;
pub mod process;
pub mod release;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
