pub mod stream;
pub mod strip;
pub mod trim;
pub mod types;

#[cfg(test)]
mod strip_tests;
