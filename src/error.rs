//! Error types for the editorconfig hook.
//!
//! None of these escape [`crate::EditorconfigHook::run`]; the hook turns each
//! of them into a semaphore message and hands the context back untouched.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::editorconfig::ParseError;

/// Everything that can stop the hook before configs are formatted.
#[derive(Debug, Error)]
pub enum HookError {
    /// The flow carried no merged configs.
    #[error("nothing to format")]
    NoConfigsToFormat,

    /// Neither the merged configs nor the target directory provide a `.editorconfig`.
    #[error("can't find .editorconfig config at {}", path.display())]
    EditorconfigSourceMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The `.editorconfig` text is not valid editorconfig syntax.
    #[error(transparent)]
    EditorconfigParseFailure(#[from] ParseError),

    /// A section supplies a value the hook can't act on.
    #[error("invalid value {value:?} for {key} in section [{pattern}]")]
    InvalidRuleValue {
        pattern: String,
        key: String,
        value: String,
    },

    /// A section header is not a usable glob.
    #[error("invalid pattern [{pattern}]: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl HookError {
    /// Warnings describe a flow with nothing to do; errors describe a broken `.editorconfig`.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            HookError::NoConfigsToFormat | HookError::EditorconfigSourceMissing { .. }
        )
    }
}
