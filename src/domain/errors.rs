// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the dynamic map crate.
//!
//! This module defines the error types that can occur when converting records to
//! and from a [`DynamicMap`](crate::domain::DynamicMap) or when encoding a map to text.
//! All errors use `thiserror` for proper error handling and conversion.

use thiserror::Error;

/// The main error type for dynamic map operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use dynmap::domain::errors::MapError;
///
/// fn convert() -> Result<(), MapError> {
///     Err(MapError::ConversionError {
///         type_name: "u32".to_string(),
///         message: "expected a map-shaped record, found number".to_string(),
///         source: None,
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// A record could not be turned into a map.
    #[error("Cannot convert value of type {type_name} into a map: {message}")]
    ConversionError {
        /// The name of the type being converted
        type_name: String,
        /// The error message
        message: String,
        /// The underlying serialization error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The contents of a map could not be written into a target record.
    #[error("Cannot deserialize map into type {target_type}: {source}")]
    DeserializationError {
        /// The target type name
        target_type: String,
        /// The underlying deserialization error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A map could not be rendered to, or parsed from, a text format.
    #[error("Failed to {operation} {format}: {message}")]
    EncodingError {
        /// The text format involved (`json`, `yaml`)
        format: String,
        /// Either `encode` or `decode`
        operation: &'static str,
        /// The error message
        message: String,
        /// The underlying codec error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MapError {
    /// Creates a `ConversionError` from a `serde_json::Error` raised while
    /// serializing a record of type `T`.
    pub fn conversion<T: ?Sized>(err: serde_json::Error) -> Self {
        MapError::ConversionError {
            type_name: std::any::type_name::<T>().to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `DeserializationError` for the target type `T`.
    pub fn deserialization<T: ?Sized>(err: serde_json::Error) -> Self {
        MapError::DeserializationError {
            target_type: std::any::type_name::<T>().to_string(),
            source: Box::new(err),
        }
    }

    /// Creates an `EncodingError` for a failed encode.
    pub fn encode<E>(format: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        MapError::EncodingError {
            format: format.to_string(),
            operation: "encode",
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates an `EncodingError` for a failed decode.
    pub fn decode<E>(format: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        MapError::EncodingError {
            format: format.to_string(),
            operation: "decode",
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for dynamic map operations.
pub type Result<T> = std::result::Result<T, MapError>;
