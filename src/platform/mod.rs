// buildpick - platform/mod.rs
//
// Platform abstraction layer: host platform identification and
// platform-appropriate configuration loading.
// Dependencies: standard library, directories crate. Must NOT depend on core.

pub mod config;
pub mod host;
