use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::models::TransactionType;
use crate::taxonomy::CategoryTaxonomy;

/// Column names a transaction export must carry, in reporting order.
/// Position in the file does not matter; extra columns are tolerated.
pub const REQUIRED_HEADERS: [&str; 5] = ["Date", "Description", "Amount", "Category", "Type"];

const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Outcome of checking one candidate export file.
///
/// Either `error` is set (the file is not a table at all, or a required
/// header is missing, so no rows were scanned) or `issues` holds every
/// row-level problem found across the full scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub valid: bool,
    pub total_rows: usize,
    pub issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    /// A whole-file failure: nothing was scanned, one message explains why.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            total_rows: 0,
            issues: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Opt-in deviations from the default lenient scan.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Also reject calendar-impossible dates and amounts with trailing
    /// characters. Off by default: the export contract only promises the
    /// lenient checks.
    pub strict: bool,
    /// Cross-check each row's `Category` against the taxonomy for the
    /// row's direction. Off by default: the plain scan accepts any
    /// category text.
    pub taxonomy: Option<CategoryTaxonomy>,
}

/// Validate one transaction export with the default lenient rules.
pub fn validate(content: &str) -> ValidationReport {
    validate_with(content, &ValidateOptions::default())
}

/// Validate one transaction export.
///
/// Pure function of its input: no I/O, nothing carried across calls.
/// Rows are split on `,` with no quote or escape handling; embedded
/// commas are not part of the export format.
pub fn validate_with(content: &str, opts: &ValidateOptions) -> ValidationReport {
    let lines: Vec<&str> = content.trim().split('\n').collect();
    if lines.len() < 2 {
        return ValidationReport::failure("File must have at least header and one data row");
    }

    let header: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !header.contains(required))
        .copied()
        .collect();
    if !missing.is_empty() {
        return ValidationReport::failure(format!("Missing headers: {}", missing.join(", ")));
    }

    let date_re = Regex::new(DATE_PATTERN).ok();
    let rows = &lines[1..];
    let mut issues = Vec::new();

    for (index, line) in rows.iter().enumerate() {
        // Header is line 1 of the file, data is 0-indexed below it.
        let row = index + 2;
        let fields: Vec<&str> = line.split(',').collect();

        if fields.len() != 5 {
            issues.push(format!("Row {row}: Incorrect number of columns"));
        }

        // A short row reads as empty at a missing position, which fails
        // that position's own check below.
        let date = fields.first().copied().unwrap_or("");
        let date_ok = date_re
            .as_ref()
            .map(|re| re.is_match(date))
            .unwrap_or(false);
        if !date_ok {
            issues.push(format!("Row {row}: Invalid date format"));
        } else if opts.strict && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            issues.push(format!("Row {row}: Invalid calendar date"));
        }

        let amount = fields.get(2).copied().unwrap_or("");
        match parse_lenient_amount(amount) {
            None => issues.push(format!("Row {row}: Invalid amount")),
            Some(_) if opts.strict && amount.trim().parse::<f64>().is_err() => {
                issues.push(format!("Row {row}: Amount has trailing characters"));
            }
            Some(_) => {}
        }

        let type_field = fields.get(4).map(|s| s.trim()).unwrap_or("");
        match TransactionType::from_field(type_field) {
            None => issues.push(format!("Row {row}: Type must be 'Income' or 'Expense'")),
            Some(tx_type) => {
                if let Some(taxonomy) = &opts.taxonomy {
                    let category = fields.get(3).map(|s| s.trim()).unwrap_or("");
                    if !category.is_empty() {
                        if !taxonomy.is_known(category) {
                            issues.push(format!("Row {row}: Unknown category '{category}'"));
                        } else if !taxonomy.allows(category, tx_type) {
                            issues.push(format!(
                                "Row {row}: Category '{category}' is not valid for {tx_type} transactions"
                            ));
                        }
                    }
                }
            }
        }
    }

    ValidationReport {
        valid: issues.is_empty(),
        total_rows: rows.len(),
        issues,
        error: None,
    }
}

/// Lenient amount parse: consume a leading numeric prefix and ignore
/// whatever follows, so "12.5abc" reads as 12.5. Returns `None` when the
/// trimmed field has no numeric prefix at all.
pub fn parse_lenient_amount(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let len = numeric_prefix_len(s);
    if len == 0 {
        return None;
    }
    s[..len].parse::<f64>().ok()
}

/// Length in bytes of the leading `[+-]?digits[.digits][e[+-]digits]`
/// prefix of `s`, or 0 when no digit is present.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {
                seen_digit = true;
                i += 1;
                end = i;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                i += 1;
            }
            _ => break,
        }
    }
    if seen_digit && matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }
    if seen_digit {
        end
    } else {
        0
    }
}
