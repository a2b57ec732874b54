//! Error types produced while resolving and loading field decorators.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::DecorError;

#[cfg(test)]
mod tests;
