use crate::error::{Error, Result};
use crate::records::PersonRecord;

/// Decodes the backend's bulk-fetch body (a JSON array of person objects)
/// into records.
///
/// This is the engine's only fallible surface, and it fails only when the
/// payload is not a JSON array of objects. Malformed *fields* inside a
/// record (bad generation, unparseable dates, missing names) are handled by
/// the lenient field decoding on [`PersonRecord`] and never fail here.
pub fn decode_members(payload: &str) -> Result<Vec<PersonRecord>> {
    serde_json::from_str(payload).map_err(|e| Error::PayloadDecode {
        message: e.to_string(),
    })
}
