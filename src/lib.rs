//! # ABA Parser
//!
//! Decodes fixed-width ABA bank payment files into batches of records and
//! optionally validates each batch against its file total record.
//!
//! ## Design Principles
//!
//! - **Schema-driven**: each line's first character selects a record schema
//!   of named column ranges; schemas can be replaced or added per parser
//! - **Lenient decoding**: malformed columns degrade to zero or empty text,
//!   and unrecognized lines are skipped
//! - **Exact money**: amounts are cents scaled by 2 decimal places via
//!   `rust_decimal`, so batch totals compare exactly
//! - **Single fatal error**: with validation enabled, the first invalid batch
//!   aborts the parse and names the line of its footer
//!
//! ## Example
//!
//! ```
//! use aba_parser::{AbaParser, Money, ParserOptions};
//!
//! let content = [
//!     "0123-456 12341234 01BQL       MY NAME                   1111111004231633  230410",
//!     "1123-456157108231Y530000001234S R SMITH                       TEST BATCH        062-000 12223123MY ACCOUNT      00000000",
//!     "7999-999            000000123400000012340000000000                        000001",
//! ]
//! .join("\n");
//!
//! let parser = AbaParser::with_options(ParserOptions::new().with_validation(true));
//! let batches = parser.parse(&content).unwrap();
//!
//! assert_eq!(batches[0].transactions[0].money("amount"), Some(Money::from_cents(1234)));
//! ```

pub mod batch;
pub mod error;
pub mod field;
pub mod money;
pub mod parser;
pub mod record;
pub mod schema;
pub mod validate;

pub use batch::{AssemblerState, Batch, DEBIT_TRANSACTION_CODE};
pub use error::{AbaError, Result};
pub use field::{FieldType, FieldValue};
pub use money::Money;
pub use parser::{AbaParser, ParserOptions};
pub use record::{decode_line, Record};
pub use schema::{FieldSpec, RecordKind, RecordSchema, SchemaRegistry};
pub use validate::{validate_batch, ValidationCode, ValidationResult, FOOTER_BSB};
