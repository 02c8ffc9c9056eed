use crate::models::TransactionType;

// Display order: expense categories first (the common case in pickers),
// then income, then the catch-all.
const ALL_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Groceries",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Housing",
    "Healthcare",
    "Education",
    "Travel",
    "Personal Care",
    "Subscriptions",
    "Salary",
    "Freelance",
    "Investments",
    "Business",
    "Gifts",
    "Other",
];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Groceries",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Housing",
    "Healthcare",
    "Education",
    "Travel",
    "Personal Care",
    "Subscriptions",
];

const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Business",
    "Gifts",
];

/// Read-only registry of transaction categories, partitioned into income
/// and expense subsets. `Other` belongs to neither subset and is accepted
/// for both directions.
///
/// Constructed explicitly and passed to whatever needs it, never consulted
/// as global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    all: &'static [&'static str],
    expense: &'static [&'static str],
    income: &'static [&'static str],
}

impl CategoryTaxonomy {
    /// The stock registry shipped with the budgeting system.
    pub fn standard() -> Self {
        Self {
            all: ALL_CATEGORIES,
            expense: EXPENSE_CATEGORIES,
            income: INCOME_CATEGORIES,
        }
    }

    /// Every category name, in display order.
    pub fn all_categories(&self) -> &[&'static str] {
        self.all
    }

    /// Categories valid for expense transactions.
    pub fn expense_categories(&self) -> &[&'static str] {
        self.expense
    }

    /// Categories valid for income transactions.
    pub fn income_categories(&self) -> &[&'static str] {
        self.income
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.all.contains(&name)
    }

    /// Whether `name` may be used for a transaction of the given direction.
    /// A known category is allowed unless the opposite subset claims it, so
    /// the catch-all works for both directions.
    pub fn allows(&self, name: &str, tx_type: TransactionType) -> bool {
        if !self.is_known(name) {
            return false;
        }
        let opposite = match tx_type {
            TransactionType::Income => self.expense,
            TransactionType::Expense => self.income,
        };
        !opposite.contains(&name)
    }
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsets_are_disjoint() {
        let taxonomy = CategoryTaxonomy::standard();
        for name in taxonomy.expense_categories() {
            assert!(
                !taxonomy.income_categories().contains(name),
                "category in both subsets: {name}"
            );
        }
    }

    #[test]
    fn test_subsets_are_recognized_categories() {
        let taxonomy = CategoryTaxonomy::standard();
        for name in taxonomy
            .expense_categories()
            .iter()
            .chain(taxonomy.income_categories())
        {
            assert!(taxonomy.is_known(name), "unrecognized category: {name}");
        }
    }

    #[test]
    fn test_catch_all_in_neither_subset() {
        let taxonomy = CategoryTaxonomy::standard();
        assert!(taxonomy.is_known("Other"));
        assert!(!taxonomy.expense_categories().contains(&"Other"));
        assert!(!taxonomy.income_categories().contains(&"Other"));
    }

    #[test]
    fn test_allows_by_direction() {
        let taxonomy = CategoryTaxonomy::standard();
        assert!(taxonomy.allows("Food & Dining", TransactionType::Expense));
        assert!(!taxonomy.allows("Food & Dining", TransactionType::Income));
        assert!(taxonomy.allows("Salary", TransactionType::Income));
        assert!(!taxonomy.allows("Salary", TransactionType::Expense));
    }

    #[test]
    fn test_allows_catch_all_for_both_directions() {
        let taxonomy = CategoryTaxonomy::standard();
        assert!(taxonomy.allows("Other", TransactionType::Income));
        assert!(taxonomy.allows("Other", TransactionType::Expense));
    }

    #[test]
    fn test_allows_rejects_unknown_names() {
        let taxonomy = CategoryTaxonomy::standard();
        assert!(!taxonomy.allows("Crypto Winnings", TransactionType::Income));
        assert!(!taxonomy.allows("", TransactionType::Expense));
    }

    #[test]
    fn test_display_order_is_stable() {
        let taxonomy = CategoryTaxonomy::standard();
        assert_eq!(taxonomy.all_categories().first(), Some(&"Food & Dining"));
        assert_eq!(taxonomy.all_categories().last(), Some(&"Other"));
        assert_eq!(taxonomy, CategoryTaxonomy::standard());
    }
}
