//! Fixed status vocabularies used by the feeds.
//!
//! The spreadsheets encode follow-up status as a small set of upper-case
//! Portuguese markers. Classification is exact-match over the trimmed,
//! upper-cased cell value.

/// Values that count as an affirmative / completed status.
pub const POSITIVE_VALUES: &[&str] = &["SIM", "REALIZADAS", "PROVÁVEL"];

/// Values that count as a pending / overdue status.
pub const NEGATIVE_VALUES: &[&str] = &[
    "NÃO",
    "FALTANDO",
    "ATRASADAS",
    "NÃO PROVÁVEL",
    "PRIORIDADE",
];

/// Sentinel used by date columns for patients outside the indicator's
/// target group.
pub const NOT_APPLICABLE: &str = "NÃO SE APLICA";

/// Placeholder the spreadsheets leave in cells with no data.
const EMPTY_PLACEHOLDER: &str = "—";

pub fn is_positive_value(value: &str) -> bool {
    let upper = value.trim().to_uppercase();
    POSITIVE_VALUES.contains(&upper.as_str())
}

pub fn is_negative_value(value: &str) -> bool {
    let upper = value.trim().to_uppercase();
    NEGATIVE_VALUES.contains(&upper.as_str())
}

/// True when a cell carries data: non-blank and not the em-dash
/// placeholder.
pub fn is_filled(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != EMPTY_PLACEHOLDER
}

/// Visual tone for a status value, used by the terminal table and the
/// exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Warning,
    Danger,
}

/// Classifies a cell value into a display tone, if it is a known status
/// marker.
pub fn status_tone(value: &str) -> Option<StatusTone> {
    match value.trim().to_uppercase().as_str() {
        "REALIZADAS" | "SIM" | "PROVÁVEL" => Some(StatusTone::Positive),
        "FALTANDO" | "ATRASADAS" | "NÃO PROVÁVEL" => Some(StatusTone::Warning),
        "PRIORIDADE" => Some(StatusTone::Danger),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive_and_trimmed() {
        assert!(is_positive_value(" sim "));
        assert!(is_negative_value("não provável"));
        assert!(!is_positive_value("TALVEZ"));
    }

    #[test]
    fn placeholder_is_not_filled() {
        assert!(!is_filled("—"));
        assert!(!is_filled("   "));
        assert!(is_filled("12/03/2026"));
    }

    #[test]
    fn tones_match_the_status_palette() {
        assert_eq!(status_tone("REALIZADAS"), Some(StatusTone::Positive));
        assert_eq!(status_tone("ATRASADAS"), Some(StatusTone::Warning));
        assert_eq!(status_tone("PRIORIDADE"), Some(StatusTone::Danger));
        assert_eq!(status_tone("ESF 01"), None);
    }
}
