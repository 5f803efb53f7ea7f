//! Storefront core: catalog, cart store, hash routing and navigation guards.
//!
//! Everything here is target independent; the wasm frontend only wires it to
//! the browser.

pub mod domain;
pub mod enums;
pub mod routing;
pub mod shared;
pub mod system;
