//! Option sets, class tokens, and defaults for the button component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UiTypeError;

/// CSS class fragments the button composes and external stylesheets bind to.
///
/// These tokens are a stable public API: renaming any of them breaks every
/// stylesheet that targets the component.
pub mod css {
    /// Added to the element while the loading state is active.
    pub const LOADING: &str = "btn-loading";
    /// Decorative spinner element shown while loading.
    pub const SPINNER: &str = "btn-spinner";
    /// Wraps the label while loading so stylesheets can de-emphasize it.
    pub const LOADING_TEXT: &str = "btn-loading-text";
    /// Prefix for size classes (`btn-small`, `btn-medium`, `btn-large`).
    pub const SIZE_PREFIX: &str = "btn-";
}

/// Default prop values, shared between the component and its consumers.
pub mod defaults {
    use super::{ButtonSize, ButtonType};

    /// Common boolean values, reusable across components.
    pub const FALSE: bool = false;
    pub const TRUE: bool = true;

    /// Common string values.
    pub const EMPTY: &str = "";

    pub const SIZE: ButtonSize = ButtonSize::Medium;
    pub const TYPE: ButtonType = ButtonType::Button;
    pub const DISABLED: bool = FALSE;
    pub const LOADING: bool = FALSE;
    pub const CLASS_NAME: &str = EMPTY;
}

/// Explicit `role` attribute value, redundant with the native element
/// semantics but emitted anyway for assistive-technology parity.
pub const ARIA_ROLE_BUTTON: &str = "button";

/// Available component sizes (reusable beyond the button).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Every valid size, in ascending visual order.
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// CSS size class, e.g. `btn-large`.
    pub fn class(self) -> String {
        format!("{}{}", css::SIZE_PREFIX, self.as_str())
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = UiTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(UiTypeError::UnknownSize { value: other.to_string() }),
        }
    }
}

/// Generic enabled/disabled state of an interactive component.
///
/// Recomputed from the current props on every render; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    Enabled,
    Disabled,
}

impl ComponentState {
    /// Either flag forces interaction off: loading always implies the
    /// disabled state, with the busy signal layered on top separately.
    pub fn from_flags(disabled: bool, loading: bool) -> Self {
        if disabled || loading {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }

    /// The state token emitted into the class attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    pub fn is_disabled(self) -> bool {
        self == Self::Disabled
    }
}

impl fmt::Display for ComponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Valid values for the native `type` attribute of a button element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    /// Every valid button type.
    pub const ALL: [ButtonType; 3] = [ButtonType::Button, ButtonType::Submit, ButtonType::Reset];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonType {
    type Err = UiTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(Self::Button),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            other => Err(UiTypeError::UnknownButtonType { value: other.to_string() }),
        }
    }
}
