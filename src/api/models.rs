use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

pub const TXT_RECORD_TYPE: &str = "TXT";

/// Payload for `POST /dns/{domain}/txt/v1`.
#[derive(Debug, Serialize)]
pub struct TxtRecordCreate<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub ttl: u32,
}

/// A TXT entry of the record listing.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TxtRecord {
    pub name: String,
    pub ttl: u32,
    pub text: String,
    #[serde(rename = "hashId")]
    pub hash_id: String,
    pub r#type: String,
}

/// Decodes the heterogeneous record listing, keeping TXT records named `name`.
///
/// The listing mixes record types with different fields, so every entry is first
/// read as a plain map and only TXT entries are projected onto [`TxtRecord`].
pub fn decode_txt_records(body: &[u8], name: &str) -> Result<Vec<TxtRecord>> {
    let records: Vec<Map<String, Value>> = serde_json::from_slice(body)?;

    let mut matches = Vec::new();
    for record in records {
        match record.get("type") {
            Some(Value::String(kind)) if kind == TXT_RECORD_TYPE => {}
            _ => continue,
        }

        let txt: TxtRecord = serde_json::from_value(Value::Object(record))?;
        if txt.name != name {
            continue;
        }
        matches.push(txt);
    }

    Ok(matches)
}
