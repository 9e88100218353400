// src/common.rs
//
// common error enum, result alias, and other globals (avoids circular imports)

use std::error::Error;
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Error enum and Result alias for templating functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Error raised by templating functions.
///
/// Tag fragments are validated eagerly, when set; see
/// [`Templater::set_config`]. Date strings are validated when resolved; see
/// [`datetime_from_str`].
///
/// [`Templater::set_config`]: crate::templater::templater::Templater::set_config
/// [`datetime_from_str`]: crate::data::datetime::datetime_from_str
#[derive(Clone, Debug, PartialEq)]
pub enum TemplaterError {
    /// A configured tag fragment formed invalid regular expression syntax.
    TagPattern(regex::Error),
    /// A date string matched no accepted input pattern; contains the
    /// offending input.
    DateInput(String),
}

/// `Result` alias for templating functions.
pub type ResultTemplate<T> = Result<T, TemplaterError>;

impl fmt::Display for TemplaterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplaterError::TagPattern(err) => {
                write!(f, "TemplaterError::TagPattern({})", err)
            }
            TemplaterError::DateInput(input) => {
                write!(f, "TemplaterError::DateInput({:?})", input)
            }
        }
    }
}

impl Error for TemplaterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TemplaterError::TagPattern(err) => Some(err),
            TemplaterError::DateInput(_) => None,
        }
    }
}

impl From<regex::Error> for TemplaterError {
    fn from(err: regex::Error) -> TemplaterError {
        TemplaterError::TagPattern(err)
    }
}
