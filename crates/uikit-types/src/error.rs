//! Typed error definitions for uikit.
//!
//! The error surface of a presentational component is small: the only thing
//! that can go wrong is a caller handing over text that is not a member of
//! an enumerated option set. These errors are never fatal to rendering;
//! strict parse paths surface them, lenient paths log and substitute the
//! documented default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contract violation in an enumerated prop value.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "error")]
pub enum UiTypeError {
    /// A size string outside the enumerated set
    #[error("unknown size '{value}' (expected one of: small, medium, large)")]
    UnknownSize {
        /// The rejected input
        value: String,
    },

    /// A button type string outside the enumerated set
    #[error("unknown button type '{value}' (expected one of: button, submit, reset)")]
    UnknownButtonType {
        /// The rejected input
        value: String,
    },
}
