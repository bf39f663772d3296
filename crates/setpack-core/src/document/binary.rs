//! Binary serialization for documents using postcard.

use super::json::DocumentError;
use super::types::Document;

impl Document {
    /// Deserialize a document from binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DocumentError> {
        Ok(postcard::from_bytes(bytes)?)
    }

    /// Serialize a document to binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(postcard::to_allocvec(self)?)
    }
}
