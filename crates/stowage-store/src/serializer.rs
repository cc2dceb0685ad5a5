//! Conversion between typed values and their on-disk byte form.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SerializerError;

/// Converts values to a complete in-memory byte payload and back.
///
/// Serialization is buffer-oriented on purpose: a save always produces the
/// full payload before any backend write happens, so a reader never
/// observes a partially serialized file.
pub trait Serializer: Send + Sync {
    /// Encodes a value into its external byte form.
    fn to_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, SerializerError>;

    /// Decodes a value from its external byte form.
    fn from_bytes<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializerError>;
}

/// The built-in serializer: pretty-printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl JsonSerializer {
    /// Creates a new JSON serializer.
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializer {
    fn to_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, SerializerError> {
        serde_json::to_vec_pretty(value).map_err(|e| SerializerError::Encode(e.into()))
    }

    fn from_bytes<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializerError> {
        serde_json::from_slice(bytes).map_err(|e| SerializerError::Decode(e.into()))
    }
}
