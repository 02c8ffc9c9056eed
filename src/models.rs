use std::fmt;

/// Direction of a transaction row, as spelled in the export's `Type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse the `Type` column. The export format is case-sensitive:
    /// only the exact spellings `Income` and `Expense` are recognized.
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "Income" => Some(Self::Income),
            "Expense" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field_exact_spellings() {
        assert_eq!(TransactionType::from_field("Income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::from_field("Expense"), Some(TransactionType::Expense));
    }

    #[test]
    fn test_from_field_is_case_sensitive() {
        assert_eq!(TransactionType::from_field("income"), None);
        assert_eq!(TransactionType::from_field("EXPENSE"), None);
        assert_eq!(TransactionType::from_field("Refund"), None);
        assert_eq!(TransactionType::from_field(""), None);
    }

    #[test]
    fn test_display_matches_column_spelling() {
        assert_eq!(TransactionType::Income.to_string(), "Income");
        assert_eq!(TransactionType::Expense.to_string(), "Expense");
    }
}
