// buildpick - core/mod.rs
//
// Core resolution logic. Reads only the filesystem it is pointed at; the
// host platform is never consulted here, it arrives through
// platform::host::PlatformProvider.

pub mod resolver;
