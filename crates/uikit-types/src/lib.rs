//! # uikit-types
//!
//! Shared types and constants for the uikit component library.
//!
//! This crate is the single source of truth for the enumerated option sets,
//! CSS class tokens, and default prop values the components and their
//! consumers agree on, so that no literal string is duplicated between a
//! component, its stylesheet, and its tests.
//!
//! - **`button`** - size/state/type enumerations, class tokens, defaults
//! - **`error`** - typed parse errors for enumerated values
//!
//! All types are designed to be:
//! - **Serializable** via serde
//! - **Copy** where possible, for cheap sharing into view closures
//! - **PartialEq** for testing and comparison

pub mod button;
pub mod error;

pub use button::{
    css, defaults, ButtonSize, ButtonType, ComponentState, ARIA_ROLE_BUTTON,
};
pub use error::UiTypeError;
