//! Record-level codec.
//!
//! A record is an ordered list of named fields. The order is the wire
//! format: encode walks the fields front to back and decode reads them back
//! in the same order from a single forward-only cursor. Nested records are
//! written inline, with no length prefix, because each nested codec consumes
//! exactly its own bytes.
//!
//! Record types are declared with [`define_record!`](crate::define_record),
//! which derives the struct, its [`RecordSchema`], the binary codec and the
//! serde representation from one field list.

mod macros;
mod schema;

pub use schema::{FieldSpec, RecordSchema};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::CodecError;
use crate::ingest::Violation;
use crate::ser::{self, ByteReader, ByteWriter, EncodedBuffer, SerResult};

/// Composite value with a fixed binary layout.
///
/// Implementations are generated by [`define_record!`](crate::define_record);
/// the required methods are not meant to be written by hand.
pub trait Record: Sized + Serialize + DeserializeOwned {
    /// Declared field layout.
    fn schema() -> &'static RecordSchema;

    /// Writes every field in declaration order.
    fn write_fields(&self, out: &mut ByteWriter);

    /// Reads every field in declaration order.
    fn read_fields(reader: &mut ByteReader<'_>) -> SerResult<Self>;

    /// Runs field and record invariants, appending failures under `path`.
    fn check_fields(&self, path: &str, violations: &mut Vec<Violation>);

    /// Serializes the record. Never fails.
    fn encode(&self) -> EncodedBuffer {
        let mut out = ByteWriter::with_capacity(Self::schema().min_encoded_len());
        self.write_fields(&mut out);
        let encoded = out.finish();
        trace!(record = Self::schema().name, len = encoded.len(), "encoded record");
        encoded
    }

    /// Deserializes a record that must occupy the whole buffer.
    ///
    /// Running out of bytes before the last field surfaces as
    /// [`SerError::TruncatedRecord`](crate::ser::SerError::TruncatedRecord)
    /// naming this record, even when the cut falls inside a nested record.
    /// Leftover bytes surface as
    /// [`SerError::TrailingBytes`](crate::ser::SerError::TrailingBytes).
    fn decode(bytes: &[u8]) -> SerResult<Self> {
        let name = Self::schema().name;
        let mut reader = ByteReader::new(bytes);
        let decoded = Self::read_fields(&mut reader)
            .map_err(|err| err.into_truncated(name))
            .and_then(|record| ser::ensure_consumed(&reader, name).map(|()| record));
        match &decoded {
            Ok(_) => trace!(record = name, len = bytes.len(), "decoded record"),
            Err(err) => debug!(record = name, len = bytes.len(), error = %err, "rejected record bytes"),
        }
        decoded
    }

    /// Lowercase hex of the encoding.
    fn to_hex(&self) -> String {
        self.encode().to_hex()
    }

    /// Decodes a record from its hex form.
    fn from_hex(text: &str) -> Result<Self, CodecError> {
        let buffer = EncodedBuffer::from_hex(text)?;
        Ok(Self::decode(buffer.as_slice())?)
    }

    /// BLAKE3 digest of the canonical encoding.
    fn digest(&self) -> [u8; 32] {
        self.encode().digest()
    }
}
