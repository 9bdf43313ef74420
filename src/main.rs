//! ABA Parser CLI
//!
//! Reads an ABA file and writes every decoded field as a CSV row.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.aba --validate > fields.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use aba_parser::{AbaError, AbaParser, Batch, ParserOptions, Record, RecordKind, Result};
use serde::Serialize;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

/// One output row: a single field of a single record.
#[derive(Serialize)]
struct FieldRow<'a> {
    batch: usize,
    record: &'static str,
    index: Option<usize>,
    field: &'a str,
    value: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let validation = args.iter().any(|a| a == "--validate");
    let input_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .ok_or(AbaError::MissingArgument)?;

    let content = fs::read_to_string(input_path)?;

    let parser = AbaParser::with_options(ParserOptions::new().with_validation(validation));
    let batches = parser.parse(&content)?;

    let stdout = io::stdout();
    write_fields(&batches, stdout.lock())
}

fn write_fields<W: Write>(batches: &[Batch], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (batch_idx, batch) in batches.iter().enumerate() {
        let batch_num = batch_idx + 1;
        if let Some(header) = &batch.header {
            write_record(&mut csv_writer, batch_num, RecordKind::Header, None, header)?;
        }
        for (tx_idx, tx) in batch.transactions.iter().enumerate() {
            write_record(
                &mut csv_writer,
                batch_num,
                RecordKind::Transaction,
                Some(tx_idx + 1),
                tx,
            )?;
        }
        write_record(
            &mut csv_writer,
            batch_num,
            RecordKind::Footer,
            None,
            &batch.footer,
        )?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn write_record<W: Write>(
    csv_writer: &mut csv::Writer<W>,
    batch: usize,
    kind: RecordKind,
    index: Option<usize>,
    fields: &Record,
) -> Result<()> {
    for (name, value) in fields {
        csv_writer.serialize(FieldRow {
            batch,
            record: kind.as_str(),
            index,
            field: name,
            value: value.to_string(),
        })?;
    }
    Ok(())
}
