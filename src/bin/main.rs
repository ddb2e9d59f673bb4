// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use payment_dispatch::{Engine, Gateway, Payment, PaymentError, PaymentRecord, RngSource};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Payment Dispatch - Validate and submit payment request CSV files
///
/// Reads payment requests from a CSV file, runs each through validation and
/// the simulated gateway, and writes one outcome row per request to stdout.
#[derive(Parser, Debug)]
#[command(name = "payment-dispatch")]
#[command(about = "Validates payment requests and dispatches them to a simulated gateway", long_about = None)]
struct Args {
    /// Path to CSV file with payment requests
    ///
    /// Expected format: method,amount,country,card_number,email
    /// Example: cargo run -- payments.csv > outcomes.csv
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Seed for the gateway simulation, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Builds the log filter from the directives in `var`, falling back to
/// [`DEFAULT_LOG_FILTER`].
fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() {
    // Logs go to stderr so stdout stays valid CSV
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(EnvFilter::DEFAULT_ENV))
        .init();

    let args = Args::parse();

    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    let mut engine = match args.seed {
        Some(seed) => Engine::simulated(RngSource::seeded(seed)),
        None => Engine::default(),
    };

    if let Err(e) = process_payments(BufReader::new(file), &mut engine, std::io::stdout()) {
        eprintln!("Error processing payments: {}", e);
        process::exit(1);
    }

    let summary = engine.summary();
    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        failed = summary.failed,
        "processed {} payments",
        summary.total()
    );
}

/// Outcome row written for every payment request.
///
/// Columns: `method, amount, country, status, message`
#[derive(Debug, Serialize)]
struct OutcomeRecord {
    method: String,
    amount: Decimal,
    country: String,
    status: &'static str,
    message: String,
}

impl OutcomeRecord {
    fn new(payment: &Payment, result: &Result<String, PaymentError>) -> Self {
        let (status, message) = match result {
            Ok(message) => ("accepted", message.clone()),
            Err(e) if e.is_gateway_failure() => ("failed", e.to_string()),
            Err(e) => ("rejected", e.to_string()),
        };
        Self {
            method: payment.method().to_string(),
            amount: payment.amount(),
            country: payment.country().to_string(),
            status,
            message,
        }
    }
}

/// Process payment requests from a CSV reader, writing outcomes as CSV.
///
/// Rows are streamed one at a time. A row that deserializes but does not
/// form a valid payment (unknown method, missing or foreign fields) is
/// written as `rejected`. Rows that fail to deserialize are skipped.
///
/// # CSV Format
///
/// Expected columns: `method, amount, country, card_number, email`
/// - `method`: `CreditCard` or `PayPal` (case-insensitive)
/// - `amount`: Decimal amount
/// - `country`: Country code, matched exactly
/// - `card_number`: Required for credit card, empty otherwise
/// - `email`: Required for PayPal, empty otherwise
///
/// # Example
///
/// ```csv
/// method,amount,country,card_number,email
/// PayPal,100,US,,test@mail
/// CreditCard,250,CA,4111111111111111,
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing an outcome fails.
fn process_payments<R: Read, W: Write, G: Gateway>(
    reader: R,
    engine: &mut Engine<G>,
    writer: W,
) -> Result<(), csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);
    let mut wtr = Writer::from_writer(writer);

    for result in rdr.deserialize::<PaymentRecord>() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "skipping malformed row");
                continue;
            }
        };

        let (method, amount, country) =
            (record.method.clone(), record.amount, record.country.clone());
        let outcome = match Payment::try_from(record) {
            Ok(payment) => {
                let result = engine.process(payment.clone());
                OutcomeRecord::new(&payment, &result)
            }
            Err(e) => {
                warn!(error = %e, "rejecting record");
                engine.record_rejection();
                OutcomeRecord {
                    method,
                    amount,
                    country,
                    status: "rejected",
                    message: e.to_string(),
                }
            }
        };
        wtr.serialize(&outcome)?;
    }

    wtr.flush()?;
    Ok(())
}
