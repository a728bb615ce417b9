use crate::domain::checksum;
use crate::domain::payload::{self, CRC_HEADER, InitiationMethod, tags};
use crate::domain::tlv::{self, Record};
use crate::error::Result;
use serde::Serialize;
use tracing::debug;

/// Rewrites a static QRIS payload into a dynamic one carrying `amount`.
///
/// `amount` must be a non-empty digit string in whole currency units. The
/// result always ends with a freshly computed `63` checksum record; any
/// checksum in the input is discarded.
///
/// # Errors
///
/// * `FormatError` if `static_payload` is not well-formed TLV.
/// * `ValidationError` if `amount` is empty or not all digits.
pub fn transform(static_payload: &str, amount: &str) -> Result<String> {
    let records = tlv::decode(static_payload)?;
    let mutated = payload::rewrite(records, amount)?;

    let mut out = tlv::encode(&mutated)?;
    out.push_str(CRC_HEADER);
    let crc = checksum::crc16(out.as_bytes());
    out.push_str(&checksum::format(crc));

    debug!(amount, records = mutated.len() + 1, "built dynamic payload");
    Ok(out)
}

/// Outcome of checking the trailing checksum of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumStatus {
    Valid,
    Invalid,
    Missing,
}

/// Compares the trailing `63` record of `payload` with a recomputed checksum.
///
/// A payload whose last record is not a four-character `63` reports
/// `Missing`. Hex digits are compared case-insensitively.
pub fn verify_checksum(payload: &str) -> Result<ChecksumStatus> {
    let records = tlv::decode(payload)?;
    Ok(checksum_status(payload, &records))
}

fn checksum_status(payload: &str, records: &[Record]) -> ChecksumStatus {
    let Some(last) = records.last() else {
        return ChecksumStatus::Missing;
    };
    if last.tag != tags::CRC || last.value.len() != 4 {
        return ChecksumStatus::Missing;
    }

    // decode only accepts ASCII input
    let covered = &payload[..payload.len() - last.value.len()];
    let expected = checksum::format(checksum::crc16(covered.as_bytes()));
    if expected.eq_ignore_ascii_case(&last.value) {
        ChecksumStatus::Valid
    } else {
        ChecksumStatus::Invalid
    }
}

/// Human-oriented summary of a payload, as printed by `qrispay inspect`.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub records: Vec<Record>,
    pub initiation: Option<&'static str>,
    pub amount: Option<String>,
    pub checksum: ChecksumStatus,
}

pub fn inspect(payload: &str) -> Result<Inspection> {
    let records = tlv::decode(payload)?;
    let checksum = checksum_status(payload, &records);

    let initiation = records
        .iter()
        .find(|r| r.tag == tags::POINT_OF_INITIATION)
        .map(|r| match InitiationMethod::from_value(&r.value) {
            Some(InitiationMethod::Static) => "static",
            Some(InitiationMethod::Dynamic) => "dynamic",
            None => "unknown",
        });
    let amount = records
        .iter()
        .find(|r| r.tag == tags::TRANSACTION_AMOUNT)
        .map(|r| r.value.clone());

    Ok(Inspection {
        records,
        initiation,
        amount,
        checksum,
    })
}
