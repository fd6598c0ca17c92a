// Common test utilities

pub mod client;
pub mod fixtures;
pub mod harness;

pub use client::*;
#[allow(unused_imports)]
pub use fixtures::*;
pub use harness::*;
