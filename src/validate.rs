//! Arithmetic and structural checks on a completed batch.

use crate::batch::Batch;
use std::fmt;

/// Bank-state-branch value every file total record must carry.
pub const FOOTER_BSB: &str = "999999";

/// Outcome code of a validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    ValidBatch,
    InvalidBatch,
}

impl ValidationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::ValidBatch => "VALID_BATCH",
            ValidationCode::InvalidBatch => "INVALID_BATCH",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub success: bool,
    pub code: ValidationCode,
    pub message: String,
}

impl ValidationResult {
    fn valid() -> Self {
        ValidationResult {
            success: true,
            code: ValidationCode::ValidBatch,
            message: "Batch looks valid".to_string(),
        }
    }

    fn invalid(message: &str) -> Self {
        ValidationResult {
            success: false,
            code: ValidationCode::InvalidBatch,
            message: message.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.success
    }
}

/// Validates a batch against its footer.
///
/// Checks run in order and stop at the first failure:
///
/// 1. footer `bsb` is `999999`
/// 2. the transaction count equals footer `numberOfTransactions`
/// 3. the sum of credit amounts equals footer `creditTotal`
/// 4. the sum of debit amounts equals footer `debitTotal`
///
/// A footer field that is missing (e.g. dropped by a custom schema) fails
/// its check. `netTotal` is not checked.
pub fn validate_batch(batch: &Batch) -> ValidationResult {
    let footer = &batch.footer;

    if footer.text("bsb") != Some(FOOTER_BSB) {
        return ValidationResult::invalid("Footer bsb must be always 999999");
    }

    let count = i64::try_from(batch.transactions.len()).ok();
    if count.is_none() || footer.integer("numberOfTransactions") != count {
        return ValidationResult::invalid("Total transactions count mismatch");
    }

    if footer.money("creditTotal") != Some(batch.credit_total()) {
        return ValidationResult::invalid("Batch creditTotal mismatch");
    }

    if footer.money("debitTotal") != Some(batch.debit_total()) {
        return ValidationResult::invalid("Batch debitTotal mismatch");
    }

    ValidationResult::valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use crate::money::Money;
    use crate::record::Record;

    fn tx(code: i64, cents: i64) -> Record {
        let mut r = Record::new();
        r.insert("transactionCode", FieldValue::Integer(code));
        r.insert("amount", FieldValue::Money(Money::from_cents(cents)));
        r
    }

    fn footer(bsb: &str, credit: i64, debit: i64, count: i64) -> Record {
        let mut r = Record::new();
        r.insert("bsb", FieldValue::Text(bsb.to_string()));
        r.insert("netTotal", FieldValue::Money(Money::from_cents(credit - debit)));
        r.insert("creditTotal", FieldValue::Money(Money::from_cents(credit)));
        r.insert("debitTotal", FieldValue::Money(Money::from_cents(debit)));
        r.insert("numberOfTransactions", FieldValue::Integer(count));
        r
    }

    fn batch(transactions: Vec<Record>, footer: Record) -> Batch {
        Batch {
            header: Some(Record::new()),
            transactions,
            footer,
        }
    }

    #[test]
    fn test_valid_batch() {
        let b = batch(
            vec![tx(50, 1000), tx(13, 250), tx(53, 5)],
            footer("999999", 1005, 250, 3),
        );

        let result = validate_batch(&b);

        assert!(result.is_valid());
        assert_eq!(result.code, ValidationCode::ValidBatch);
        assert_eq!(result.code.as_str(), "VALID_BATCH");
        assert_eq!(result.message, "Batch looks valid");
    }

    #[test]
    fn test_footer_bsb_must_be_sentinel() {
        let b = batch(vec![], footer("999998", 0, 0, 0));

        let result = validate_batch(&b);

        assert!(!result.success);
        assert_eq!(result.code.as_str(), "INVALID_BATCH");
        assert_eq!(result.message, "Footer bsb must be always 999999");
    }

    #[test]
    fn test_count_mismatch() {
        let b = batch(vec![tx(50, 100)], footer("999999", 100, 0, 2));
        assert_eq!(
            validate_batch(&b).message,
            "Total transactions count mismatch"
        );
    }

    #[test]
    fn test_credit_mismatch() {
        let b = batch(vec![tx(50, 100)], footer("999999", 101, 0, 1));
        assert_eq!(validate_batch(&b).message, "Batch creditTotal mismatch");
    }

    #[test]
    fn test_debit_mismatch() {
        let b = batch(vec![tx(13, 100)], footer("999999", 0, 99, 1));
        assert_eq!(validate_batch(&b).message, "Batch debitTotal mismatch");
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // wrong bsb and wrong count: bsb reported first
        let b = batch(vec![tx(50, 100)], footer("000000", 0, 0, 5));
        assert_eq!(
            validate_batch(&b).message,
            "Footer bsb must be always 999999"
        );

        // wrong count and wrong credit: count reported first
        let b = batch(vec![tx(50, 100)], footer("999999", 0, 0, 5));
        assert_eq!(
            validate_batch(&b).message,
            "Total transactions count mismatch"
        );
    }

    #[test]
    fn test_net_total_is_ignored() {
        let mut f = footer("999999", 100, 0, 1);
        f.insert("netTotal", FieldValue::Money(Money::from_cents(123456)));
        let b = batch(vec![tx(50, 100)], f);

        assert!(validate_batch(&b).is_valid());
    }

    #[test]
    fn test_missing_footer_fields_fail() {
        let mut f = Record::new();
        f.insert("bsb", FieldValue::Text(FOOTER_BSB.to_string()));
        let b = batch(vec![], f);

        assert_eq!(
            validate_batch(&b).message,
            "Total transactions count mismatch"
        );
    }

    #[test]
    fn test_headerless_batch_can_be_valid() {
        let b = Batch {
            header: None,
            transactions: vec![],
            footer: footer("999999", 0, 0, 0),
        };
        assert!(validate_batch(&b).is_valid());
    }
}
