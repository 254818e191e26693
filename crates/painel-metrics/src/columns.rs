//! Generic per-column aggregates, independent of any category's business
//! columns.
//!
//! Headers are classified by an ordered substring rule table instead of
//! scattered conditionals, so the rules stay independently testable and a
//! new feed layout only needs a table edit.

use painel_model::{NOT_APPLICABLE, Record, is_filled, is_negative_value, is_positive_value};

use crate::value::MetricValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ColumnKind {
    Boolean,
    Date,
    Text,
}

/// One classification rule: header contains `token` ⇒ `kind`.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub token: &'static str,
    pub kind: ColumnKind,
}

const fn rule(token: &'static str, kind: ColumnKind) -> ClassificationRule {
    ClassificationRule { token, kind }
}

/// First match wins; date markers are probed before the boolean ones, and
/// the parenthesized small integers denote expected-count columns.
pub const DEFAULT_RULES: &[ClassificationRule] = &[
    rule("DATA", ColumnKind::Date),
    rule("ÚLTIMA", ColumnKind::Date),
    rule("ULTIMO", ColumnKind::Date),
    rule("SIM", ColumnKind::Boolean),
    rule("TOTAL DE", ColumnKind::Boolean),
    rule("(1)", ColumnKind::Boolean),
    rule("(2)", ColumnKind::Boolean),
    rule("(3)", ColumnKind::Boolean),
    rule("(7)", ColumnKind::Boolean),
    rule("(9)", ColumnKind::Boolean),
];

/// Identifier and personal-data columns carry no indicator signal.
const SKIP_TOKENS: &[&str] = &[
    "EQUIPE",
    "MICROÁREA",
    "MICROAREA",
    "NOME",
    "CPF",
    "CNS",
    "NASCIMENTO",
    "IDADE",
];

/// Spreadsheet formula spill that sometimes leaks into header cells.
const FORMULA_TOKENS: &[&str] = &["SEERRO", "ARRAYFORMULA"];

pub fn classify_header(header: &str, rules: &[ClassificationRule]) -> ColumnKind {
    let upper = header.to_uppercase();
    rules
        .iter()
        .find(|rule| upper.contains(rule.token))
        .map_or(ColumnKind::Text, |rule| rule.kind)
}

fn should_skip(header: &str) -> bool {
    let upper = header.to_uppercase();
    upper == "Nº" || SKIP_TOKENS.iter().any(|token| upper.contains(token))
}

/// Drops blank headers and formula spill before the column window is
/// applied.
pub fn clean_headers(headers: &[String]) -> Vec<&String> {
    headers
        .iter()
        .filter(|header| {
            !header.is_empty() && !FORMULA_TOKENS.iter().any(|token| header.contains(token))
        })
        .collect()
}

/// Aggregates for one classified column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ColumnMetric {
    pub header: String,
    pub kind: ColumnKind,
    pub positive: usize,
    pub negative: usize,
    pub filled: usize,
    pub total: usize,
}

impl ColumnMetric {
    /// The number shown on the progress bar: positive count when the
    /// column has one, otherwise the filled count.
    pub fn headline(&self) -> MetricValue {
        let count = if self.positive > 0 {
            self.positive
        } else {
            self.filled
        };
        MetricValue::new(count, self.total)
    }
}

/// Computes aggregates for the cleaned headers inside the inclusive
/// `(start, end)` window. Columns on the exclusion list and columns with
/// no meaningful counts are omitted.
pub fn column_metrics(
    records: &[&Record],
    headers: &[String],
    range: (usize, usize),
    rules: &[ClassificationRule],
) -> Vec<ColumnMetric> {
    let cleaned = clean_headers(headers);
    let (start, end) = range;
    let window = cleaned
        .into_iter()
        .skip(start)
        .take(end.saturating_sub(start) + 1);

    let mut metrics = Vec::new();
    for header in window {
        if should_skip(header) {
            continue;
        }
        let kind = classify_header(header, rules);
        let mut positive = 0;
        let mut negative = 0;
        let mut filled = 0;
        for record in records {
            let value = record.get(header);
            match kind {
                ColumnKind::Boolean => {
                    if is_positive_value(value) {
                        positive += 1;
                    } else if is_negative_value(value) {
                        negative += 1;
                    }
                }
                ColumnKind::Date => {
                    if is_filled(value) && value != NOT_APPLICABLE {
                        filled += 1;
                    }
                }
                ColumnKind::Text => {
                    if is_filled(value) {
                        filled += 1;
                    }
                }
            }
        }
        if positive == 0 && negative == 0 && filled == 0 {
            continue;
        }
        metrics.push(ColumnMetric {
            header: header.clone(),
            kind,
            positive,
            negative,
            filled,
            total: records.len(),
        });
    }
    metrics
}
