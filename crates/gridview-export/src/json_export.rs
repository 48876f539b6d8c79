//! JSON rendering of records.

use crate::error::Result;
use serde::Serialize;

/// Serializes records as a pretty-printed JSON array, whole records and all
/// their fields.
pub fn to_json<'r, R, I>(records: I) -> Result<Vec<u8>>
where
    R: Serialize + ?Sized + 'r,
    I: IntoIterator<Item = &'r R>,
{
    let records: Vec<&R> = records.into_iter().collect();
    Ok(serde_json::to_vec_pretty(&records)?)
}
