// buildpick - lib.rs
//
// Library entry point. The CLI binary in main.rs is a thin wrapper around
// these modules; everything here is usable programmatically and covered by
// the integration tests.

pub mod core;
pub mod platform;
pub mod util;
