use super::tlv::Record;
use crate::error::{QrisError, Result};

/// Tags of the merchant-presented payload that the rewriter knows about.
pub mod tags {
    pub const FORMAT_VERSION: &str = "00";
    pub const POINT_OF_INITIATION: &str = "01";
    pub const TRANSACTION_AMOUNT: &str = "54";
    pub const COUNTRY_CODE: &str = "58";
    pub const CRC: &str = "63";
}

/// Tag and length header of the trailing checksum record.
pub const CRC_HEADER: &str = "6304";

/// Point-of-initiation method carried in tag `01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitiationMethod {
    /// Reusable code, the payer enters the amount.
    Static,
    /// Single-use code with the amount embedded.
    Dynamic,
}

impl InitiationMethod {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "11" => Some(Self::Static),
            "12" => Some(Self::Dynamic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "11",
            Self::Dynamic => "12",
        }
    }
}

/// Turns a static record list into a dynamic one bound to `amount`.
///
/// Drops any checksum record, forces tag `01` to dynamic and sets tag `54`
/// to `amount`. A missing `54` is placed right before the first `58`, or at
/// the end when there is none. Every other record keeps its relative order.
pub fn rewrite(mut records: Vec<Record>, amount: &str) -> Result<Vec<Record>> {
    validate_amount(amount)?;

    records.retain(|record| record.tag != tags::CRC);

    let dynamic = InitiationMethod::Dynamic.as_str();
    match find(&records, tags::POINT_OF_INITIATION) {
        Some(index) => records[index].value = dynamic.to_string(),
        None => records.insert(0, Record::new(tags::POINT_OF_INITIATION, dynamic)),
    }

    match find(&records, tags::TRANSACTION_AMOUNT) {
        Some(index) => records[index].value = amount.to_string(),
        None => {
            let at = find(&records, tags::COUNTRY_CODE).unwrap_or(records.len());
            records.insert(at, Record::new(tags::TRANSACTION_AMOUNT, amount));
        }
    }

    Ok(records)
}

fn find(records: &[Record], tag: &str) -> Option<usize> {
    records.iter().position(|record| record.tag == tag)
}

fn validate_amount(amount: &str) -> Result<()> {
    if amount.is_empty() {
        return Err(QrisError::ValidationError(
            "Amount must not be empty".to_string(),
        ));
    }
    if !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QrisError::ValidationError(format!(
            "Amount '{amount}' must contain digits only"
        )));
    }
    Ok(())
}
