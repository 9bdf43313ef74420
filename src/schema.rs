//! Record schemas and the registry that maps line discriminants to them.
//!
//! Every line of an ABA file starts with a one-character record type. The
//! registry resolves that character to a [`RecordSchema`] describing which
//! columns hold which fields. Built-in layouts cover the descriptive record
//! (`'0'`), detail records (`'1'`) and the file total record (`'7'`).

use crate::field::FieldType;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::OnceLock;

/// Role a record plays when lines are grouped into batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Opens a batch (descriptive record).
    Header,

    /// One payment inside a batch (detail record).
    Transaction,

    /// Closes a batch (file total record).
    Footer,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Header => "header",
            RecordKind::Transaction => "transaction",
            RecordKind::Footer => "footer",
        }
    }
}

/// A named field occupying a half-open character range of a line.
///
/// Ranges are not required to be disjoint or ordered within a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub range: Range<usize>,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, start: usize, end: usize, field_type: FieldType) -> Self {
        FieldSpec {
            name: name.into(),
            range: start..end,
            field_type,
        }
    }
}

/// Layout of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub kind: RecordKind,
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new(kind: RecordKind, fields: Vec<FieldSpec>) -> Self {
        RecordSchema { kind, fields }
    }

    /// Appends a field (builder style).
    pub fn field(mut self, name: &str, start: usize, end: usize, field_type: FieldType) -> Self {
        self.fields.push(FieldSpec::new(name, start, end, field_type));
        self
    }

    /// Descriptive record layout, discriminant `'0'`.
    pub fn default_header() -> Self {
        use FieldType::*;
        RecordSchema::new(RecordKind::Header, Vec::new())
            .field("bsb", 1, 8, Bsb)
            .field("account", 8, 17, String)
            .field("sequenceNumber", 19, 20, Integer)
            .field("bank", 20, 23, String)
            .field("user", 30, 56, String)
            .field("userNumber", 56, 62, String)
            .field("description", 62, 74, String)
            // DDMMYY and HHmm stay as written
            .field("date", 74, 80, Raw)
            .field("time", 80, 84, Raw)
    }

    /// Detail record layout, discriminant `'1'`.
    pub fn default_transaction() -> Self {
        use FieldType::*;
        RecordSchema::new(RecordKind::Transaction, Vec::new())
            .field("transactionType", 0, 1, String)
            .field("bsb", 1, 8, Bsb)
            .field("account", 8, 17, String)
            .field("tax", 17, 18, String)
            .field("transactionCode", 18, 20, Integer)
            .field("amount", 20, 30, Money)
            .field("accountTitle", 30, 62, String)
            .field("reference", 62, 80, String)
            .field("traceBsb", 80, 87, Bsb)
            .field("traceAccount", 87, 96, String)
            .field("remitter", 96, 112, String)
            .field("taxAmount", 112, 120, Money)
    }

    /// File total record layout, discriminant `'7'`.
    pub fn default_footer() -> Self {
        use FieldType::*;
        RecordSchema::new(RecordKind::Footer, Vec::new())
            .field("bsb", 1, 8, Bsb)
            .field("netTotal", 20, 30, Money)
            .field("creditTotal", 30, 40, Money)
            .field("debitTotal", 40, 50, Money)
            .field("numberOfTransactions", 74, 80, Integer)
    }
}

/// Maps a line's first character to the schema that decodes it.
///
/// A registry is immutable once built. Parsers hold their own copy, so
/// concurrent read-only parses through a shared parser are safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemas: HashMap<char, RecordSchema>,
}

impl SchemaRegistry {
    /// The built-in registry, constructed once per process.
    pub fn defaults() -> &'static SchemaRegistry {
        static DEFAULTS: OnceLock<SchemaRegistry> = OnceLock::new();
        DEFAULTS.get_or_init(|| {
            let mut schemas = HashMap::new();
            schemas.insert('0', RecordSchema::default_header());
            schemas.insert('1', RecordSchema::default_transaction());
            schemas.insert('7', RecordSchema::default_footer());
            SchemaRegistry { schemas }
        })
    }

    /// Builds a registry from the defaults with `overrides` laid on top.
    ///
    /// An override replaces the whole default entry for its discriminant;
    /// fields are never merged.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (char, RecordSchema)>,
    {
        let mut registry = Self::defaults().clone();
        registry.schemas.extend(overrides);
        registry
    }

    /// Looks up the schema bound to a discriminant character.
    pub fn resolve(&self, discriminant: char) -> Option<&RecordSchema> {
        self.schemas.get(&discriminant)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::defaults().clone()
    }
}
