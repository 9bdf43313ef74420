//! Batches and the state machine that groups records into them.
//!
//! Records arrive in file order. A header opens a batch, transactions
//! accumulate, and a footer closes the batch. Anything left open when a new
//! header arrives, or when input ends, is dropped without error.

use crate::money::Money;
use crate::record::Record;
use crate::schema::RecordKind;
use log::debug;
use serde::Serialize;

/// Transaction code marking a debit; every other code is a credit.
pub const DEBIT_TRANSACTION_CODE: i64 = 13;

/// One header, its transactions, and the footer that closed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    /// `None` when a footer closed a batch that never saw a header.
    pub header: Option<Record>,
    pub transactions: Vec<Record>,
    pub footer: Record,
}

impl Batch {
    /// Sum of `amount` over credit transactions.
    pub fn credit_total(&self) -> Money {
        self.transactions
            .iter()
            .filter(|tx| !is_debit(tx))
            .map(amount_of)
            .sum()
    }

    /// Sum of `amount` over debit transactions.
    pub fn debit_total(&self) -> Money {
        self.transactions
            .iter()
            .filter(|tx| is_debit(tx))
            .map(amount_of)
            .sum()
    }
}

fn is_debit(tx: &Record) -> bool {
    tx.integer("transactionCode") == Some(DEBIT_TRANSACTION_CODE)
}

fn amount_of(tx: &Record) -> Money {
    tx.money("amount").unwrap_or(Money::ZERO)
}

/// Records received since the last footer.
///
/// The state is `AwaitingHeader` while `pending_header` is `None`, and
/// `InBatch` once a header has been seen.
#[derive(Debug, Default)]
pub struct AssemblerState {
    pub pending_header: Option<Record>,
    pub pending_transactions: Vec<Record>,
}

impl AssemblerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one decoded record into the state.
    ///
    /// Returns the completed batch when `record` is a footer, leaving the
    /// state empty again.
    pub fn step(&mut self, kind: RecordKind, record: Record) -> Option<Batch> {
        match kind {
            RecordKind::Header => {
                if self.pending_header.is_some() {
                    debug!("Header superseded before a footer closed its batch");
                }
                self.pending_header = Some(record);
                None
            }
            RecordKind::Transaction => {
                self.pending_transactions.push(record);
                None
            }
            RecordKind::Footer => {
                if self.pending_header.is_none() {
                    debug!("Footer closes a batch with no header");
                }
                Some(Batch {
                    header: self.pending_header.take(),
                    transactions: std::mem::take(&mut self.pending_transactions),
                    footer: record,
                })
            }
        }
    }

    /// Returns `true` if a header is pending.
    pub fn in_batch(&self) -> bool {
        self.pending_header.is_some()
    }

    /// Discards whatever is still pending at end of input.
    ///
    /// Returns the number of records dropped.
    pub fn finish(self) -> usize {
        let dropped = usize::from(self.pending_header.is_some()) + self.pending_transactions.len();
        if dropped > 0 {
            debug!("Discarding {} unterminated record(s) at end of input", dropped);
        }
        dropped
    }
}
