#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Support library for generating Go bindings to OpenGL-family C APIs.
//!
//! - `descriptor` - native type occurrences handed over by the registry loader
//! - `classify` - native base name → target primitive category
//! - `convert` - target type spelling and conversion expressions
//! - `naming` - API-family prefix stripping
//! - `writer` - blank line removal for generated output
//!
//! Everything except the writer is pure and can be called from any thread.

mod classify;
mod config;
mod convert;
mod descriptor;
mod naming;
mod writer;

#[cfg(test)]
mod classify_tests;

pub use classify::{Category, DEBUG_PROC, TargetType, classify, known_names, lookup};
pub use config::Config;
pub use convert::{Conversion, target_type, to_native, to_target};
pub use descriptor::{TypeDescriptor, Typedef, VOID_NAMES};
pub use naming::{Guard, PrefixRule, PrefixRules, trim_api_prefix};
pub use writer::{BlankLineStrippingWriter, StripError};
