use crate::error::{QrisError, Result};
use serde::Serialize;

/// Width of the tag field.
pub const TAG_LEN: usize = 2;
/// Width of the decimal length field.
pub const LENGTH_LEN: usize = 2;
/// Largest value length a two-digit length field can express.
pub const MAX_VALUE_LEN: usize = 99;

const HEADER_LEN: usize = TAG_LEN + LENGTH_LEN;

/// A single tag-length-value data object of a QR payload.
///
/// The length is not stored; it is always derived from `value` on encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub tag: String,
    pub value: String,
}

impl Record {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// Decodes a flat TLV string into its records, in order.
///
/// The whole input must be consumed by complete `tag + length + value` groups.
pub fn decode(payload: &str) -> Result<Vec<Record>> {
    if !payload.is_ascii() {
        return Err(QrisError::FormatError(
            "payload contains non-ASCII characters".to_string(),
        ));
    }

    let bytes = payload.as_bytes();
    let mut records = Vec::new();
    let mut offset = 0;

    while offset < bytes.len() {
        let remaining = bytes.len() - offset;
        if remaining < HEADER_LEN {
            return Err(QrisError::FormatError(format!(
                "truncated header at offset {offset}: {remaining} character(s) left"
            )));
        }

        let tag = &payload[offset..offset + TAG_LEN];
        let length_field = &payload[offset + TAG_LEN..offset + HEADER_LEN];
        let length = parse_length(length_field.as_bytes()).ok_or_else(|| {
            QrisError::FormatError(format!(
                "invalid length field '{length_field}' for tag {tag}"
            ))
        })?;

        let value_start = offset + HEADER_LEN;
        let value_end = value_start + length;
        if value_end > bytes.len() {
            return Err(QrisError::FormatError(format!(
                "tag {tag} declares {length} character(s) but only {} remain",
                bytes.len() - value_start
            )));
        }

        records.push(Record::new(tag, &payload[value_start..value_end]));
        offset = value_end;
    }

    Ok(records)
}

/// Encodes records back into a TLV string, preserving their order.
pub fn encode(records: &[Record]) -> Result<String> {
    let capacity = records.iter().map(|r| HEADER_LEN + r.value.len()).sum();
    let mut out = String::with_capacity(capacity);

    for record in records {
        if record.tag.len() != TAG_LEN || !record.tag.is_ascii() {
            return Err(QrisError::FormatError(format!(
                "tag '{}' must be exactly {TAG_LEN} ASCII characters",
                record.tag
            )));
        }
        if !record.value.is_ascii() {
            return Err(QrisError::FormatError(format!(
                "value of tag {} contains non-ASCII characters",
                record.tag
            )));
        }
        if record.value.len() > MAX_VALUE_LEN {
            return Err(QrisError::FormatError(format!(
                "value of tag {} is {} characters long, limit is {MAX_VALUE_LEN}",
                record.tag,
                record.value.len()
            )));
        }

        out.push_str(&record.tag);
        out.push_str(&format!("{:02}", record.value.len()));
        out.push_str(&record.value);
    }

    Ok(out)
}

fn parse_length(field: &[u8]) -> Option<usize> {
    match field {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(usize::from(tens - b'0') * 10 + usize::from(ones - b'0'))
        }
        _ => None,
    }
}
