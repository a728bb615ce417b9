use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One line of batch output.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentCodeRow {
    pub reference: String,
    pub amount: String,
    pub qris: String,
}

/// Writes generated payment codes as CSV with a `reference,amount,qris` header.
pub struct PaymentCodeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentCodeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_row(&mut self, row: &PaymentCodeRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
