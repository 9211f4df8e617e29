//! Zellij plugin entry point.
//!
//! The plugin itself lives in [`plugin`] and only exists when building for
//! the Zellij WASM runtime (`wasm32-wasip1`). Native builds produce a stub
//! binary so the library and its tests build without the host imports.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
mod plugin;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("autocomplete is a Zellij plugin; build it with --target wasm32-wasip1");
}
