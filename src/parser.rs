//! The ABA parser: splits content into lines, decodes each line with the
//! schema its first character selects, and assembles batches.

use crate::batch::{AssemblerState, Batch};
use crate::error::{AbaError, Result};
use crate::record::decode_line;
use crate::schema::{RecordSchema, SchemaRegistry};
use crate::validate::{validate_batch, ValidationResult};
use log::{debug, warn};
use std::collections::HashMap;

/// Construction-time configuration for an [`AbaParser`].
#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    /// Abort `parse` on the first batch that fails validation.
    pub validation: bool,

    /// Schemas replacing or extending the built-in discriminant bindings.
    pub schemas: HashMap<char, RecordSchema>,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation(mut self, validation: bool) -> Self {
        self.validation = validation;
        self
    }

    /// Binds `schema` to lines starting with `discriminant`.
    pub fn with_schema(mut self, discriminant: char, schema: RecordSchema) -> Self {
        self.schemas.insert(discriminant, schema);
        self
    }
}

/// Parser for ABA payment batch files.
///
/// The schema registry is fixed at construction. Parsing takes `&self`, so
/// one parser can serve concurrent parses from several threads.
///
/// # Example
///
/// ```
/// use aba_parser::AbaParser;
///
/// let content = "0123-456 12341234 01BQL\n7999-999            000000000000000000000000000000                        000000";
/// let batches = AbaParser::new().parse(content).unwrap();
/// assert_eq!(batches.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AbaParser {
    validation: bool,
    registry: SchemaRegistry,
}

impl AbaParser {
    /// Creates a parser with the built-in schemas and validation disabled.
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        AbaParser {
            validation: options.validation,
            registry: SchemaRegistry::with_overrides(options.schemas),
        }
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn validation_enabled(&self) -> bool {
        self.validation
    }

    /// Parses `content` into the batches it contains, in file order.
    ///
    /// Lines may end in `\n` or `\r\n`. Lines whose first character has no
    /// schema are skipped. Records not closed by a footer are dropped.
    ///
    /// # Errors
    ///
    /// With validation enabled, returns [`AbaError::InvalidBatch`] for the
    /// first batch that fails [`validate_batch`], naming the 1-based line of
    /// its footer. Nothing after that line is processed.
    pub fn parse(&self, content: &str) -> Result<Vec<Batch>> {
        let mut batches = Vec::new();
        let mut state = AssemblerState::new();

        for (line_idx, line) in content.lines().enumerate() {
            let line_num = line_idx + 1;

            let Some(schema) = line.chars().next().and_then(|c| self.registry.resolve(c)) else {
                debug!("Line {}: No schema for record type, skipping", line_num);
                continue;
            };

            let record = decode_line(line, schema);
            let Some(batch) = state.step(schema.kind, record) else {
                continue;
            };

            if self.validation {
                let result = validate_batch(&batch);
                if !result.success {
                    warn!("Line {}: {}", line_num, result.message);
                    return Err(AbaError::InvalidBatch {
                        line: line_num,
                        message: result.message,
                    });
                }
            }

            debug!(
                "Line {}: Closed batch with {} transaction(s)",
                line_num,
                batch.transactions.len()
            );
            batches.push(batch);
        }

        state.finish();
        Ok(batches)
    }

    /// Validates one batch without failing.
    pub fn validate_batch(&self, batch: &Batch) -> ValidationResult {
        validate_batch(batch)
    }
}

impl Default for AbaParser {
    fn default() -> Self {
        Self::new()
    }
}
