//! Primary error enum for decorator construction and definition loading.

use figment::Error as FigmentError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors raised while resolving or loading field decorators.
///
/// Applying decorators never fails; these variants cover the surrounding
/// plumbing: registry lookups, argument decoding and definition files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecorError {
    /// No decorator is registered for the field type and mutation pair.
    #[error("no decorator registered for '{field_type}' field mutation '{mutation}'")]
    UnknownDecorator {
        /// Field type tag that was requested.
        field_type: String,
        /// Mutation name that was requested.
        mutation: String,
    },

    /// More than one decorator type is registered for the pair.
    #[error("several decorators registered for '{field_type}' field mutation '{mutation}'")]
    DuplicateDecorator {
        /// Field type tag that was requested.
        field_type: String,
        /// Mutation name that was requested.
        mutation: String,
    },

    /// Decorator arguments could not be decoded.
    #[error("invalid arguments for '{field_type}' field mutation '{mutation}': {source}")]
    InvalidArguments {
        /// Field type tag of the decorator.
        field_type: String,
        /// Mutation name of the decorator.
        mutation: String,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be used as a configuration map.
    #[error("invalid field configuration: {message}")]
    InvalidConfig {
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// Error originating from a field definition file.
    #[error("field definition file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: camino::Utf8PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while extracting definitions from a host figment.
    #[error("failed to gather field definitions: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Multiple errors occurred while resolving a definition.
    #[error("multiple field decorator errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}
