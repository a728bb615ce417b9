use crate::error::{QrisError, Result};
use serde::Deserialize;
use std::io::Read;

/// One line of a batch input: a caller reference and a free-form amount.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub reference: String,
    pub amount: String,
}

/// Reads payment requests from a CSV source.
///
/// Expects a `reference,amount` header. Whitespace around fields is trimmed
/// and short rows are reported per record rather than aborting the stream.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentRequestReader<R> {
    /// Creates a new `PaymentRequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(QrisError::from))
    }
}
