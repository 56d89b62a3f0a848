//! Core types for the cross-chain intent generator.
//!
//! This crate holds the route the generator is wired to, the order record
//! that gets ABI-encoded into `orderData`, the generated intent payload and
//! the input validator shared by the builder and the command-line shell.

pub mod amount;
pub mod intent;
pub mod route;
pub mod validation;

pub use amount::*;
pub use intent::*;
pub use route::*;
pub use validation::*;
