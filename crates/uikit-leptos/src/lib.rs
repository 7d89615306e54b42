//! uikit - Leptos UI components
//!
//! A small component library with prop-driven visual states. The derivation
//! from props to presentation (class string, ARIA attributes, interaction
//! gating) lives in plain functions beside each component so it can be unit
//! tested without a DOM.

pub mod app;
pub mod components;
