use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use qrispay::application::generator::PaymentCode;
use qrispay::application::transform::{ChecksumStatus, inspect, transform};
use qrispay::domain::amount::Amount;
use qrispay::domain::tlv;
use qrispay::error::QrisError;
use qrispay::interfaces::csv::payment_writer::{PaymentCodeRow, PaymentCodeWriter};
use qrispay::interfaces::csv::request_reader::{PaymentRequest, PaymentRequestReader};
use qrispay::logging;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite a static QRIS payload into a dynamic one carrying AMOUNT
    Transform {
        /// Static payload as issued to the merchant
        payload: String,

        /// Amount in whole currency units; separators such as "Rp 25.000" are ignored
        amount: String,

        /// Print `{"amount", "qris"}` JSON instead of the bare payload
        #[arg(long)]
        json: bool,
    },
    /// Decode a payload and check its trailing checksum
    Inspect {
        payload: String,

        #[arg(long)]
        json: bool,
    },
    /// Generate one dynamic payload per row of a `reference,amount` CSV file
    Batch {
        /// Input requests CSV file
        input: PathBuf,

        /// Static payload shared by every row
        #[arg(long, env = "QRIS_STATIC_PAYLOAD")]
        payload: String,
    },
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Transform {
            payload,
            amount,
            json,
        } => {
            let amount = normalize_amount(&amount).into_diagnostic()?;
            let qris = transform(&payload, amount.as_str()).into_diagnostic()?;
            if json {
                let code = PaymentCode { amount, qris };
                println!("{}", serde_json::to_string(&code).into_diagnostic()?);
            } else {
                println!("{qris}");
            }
        }
        Command::Inspect { payload, json } => {
            let inspection = inspect(&payload).into_diagnostic()?;
            if json {
                println!("{}", serde_json::to_string(&inspection).into_diagnostic()?);
            } else {
                for record in &inspection.records {
                    println!("{} {:02} {}", record.tag, record.value.len(), record.value);
                }
                println!("initiation: {}", inspection.initiation.unwrap_or("absent"));
                println!("amount: {}", inspection.amount.as_deref().unwrap_or("absent"));
                let checksum = match inspection.checksum {
                    ChecksumStatus::Valid => "valid",
                    ChecksumStatus::Invalid => "invalid",
                    ChecksumStatus::Missing => "missing",
                };
                println!("checksum: {checksum}");
            }
        }
        Command::Batch { input, payload } => {
            // A malformed static payload fails the whole batch
            tlv::decode(&payload).into_diagnostic()?;

            let file = File::open(input).into_diagnostic()?;
            let reader = PaymentRequestReader::new(file);
            let stdout = io::stdout();
            let mut writer = PaymentCodeWriter::new(stdout.lock());

            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        let reference = request.reference.clone();
                        match build_row(&payload, request) {
                            Ok(row) => writer.write_row(&row).into_diagnostic()?,
                            Err(e) => {
                                warn!(%reference, error = %e, "rejected batch row");
                                eprintln!("Error processing request: {}", e);
                            }
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "unreadable batch row");
                        eprintln!("Error reading request: {}", e);
                    }
                }
            }
            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}

fn normalize_amount(raw: &str) -> Result<Amount, QrisError> {
    Amount::normalize(raw)
        .ok_or_else(|| QrisError::ValidationError(format!("No amount provided in '{raw}'")))
}

fn build_row(payload: &str, request: PaymentRequest) -> Result<PaymentCodeRow, QrisError> {
    let amount = normalize_amount(&request.amount)?;
    let qris = transform(payload, amount.as_str())?;
    Ok(PaymentCodeRow {
        reference: request.reference,
        amount: amount.to_string(),
        qris,
    })
}
