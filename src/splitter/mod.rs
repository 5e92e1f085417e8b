mod split;


pub use split::split_content;

use thiserror::Error;

/// Platform-standard "more" marker used when no separator override is supplied
pub const DEFAULT_SEPARATOR: &str = "<!--more-->";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SplitError {
    #[error("separator must not be empty")]
    EmptySeparator,
}
