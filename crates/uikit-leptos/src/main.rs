//! uikit demo entry point.
//!
//! Mounts the button gallery into the document body.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use uikit_types as _;
use wasm_bindgen as _;
use web_sys as _;

use leptos::prelude::*;
use uikit_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("uikit demo starting...");

    mount_to_body(App);
}
