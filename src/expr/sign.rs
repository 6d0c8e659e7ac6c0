//! Declared sign of an expression's values

use std::fmt;

/// Declared polarity of an expression's entries
///
/// `Positive` means entrywise non-negative and `Negative` means entrywise
/// non-positive; both admit zero. `Unknown` places no restriction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    /// All entries are non-negative
    Positive,
    /// All entries are non-positive
    Negative,
    /// No declared polarity
    #[default]
    Unknown,
}

impl Sign {
    /// Whether this sign asserts entrywise non-negativity
    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(self, Sign::Positive)
    }

    /// Whether this sign asserts entrywise non-positivity
    #[inline]
    pub fn is_negative(&self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// Infer the sign of a concrete set of entries
    ///
    /// All entries non-negative gives `Positive`, all non-positive gives
    /// `Negative` (all-zero data reports `Positive`). Mixed or NaN entries
    /// give `Unknown`.
    pub fn from_entries(entries: &[f64]) -> Sign {
        if entries.iter().any(|x| x.is_nan()) {
            return Sign::Unknown;
        }
        if entries.iter().all(|x| *x >= 0.0) {
            Sign::Positive
        } else if entries.iter().all(|x| *x <= 0.0) {
            Sign::Negative
        } else {
            Sign::Unknown
        }
    }

    /// Returns the sign name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Sign::Positive => "non-negative",
            Sign::Negative => "non-positive",
            Sign::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entries() {
        assert_eq!(Sign::from_entries(&[0.0, 1.0, 2.5]), Sign::Positive);
        assert_eq!(Sign::from_entries(&[-1.0, 0.0]), Sign::Negative);
        assert_eq!(Sign::from_entries(&[-1.0, 1.0]), Sign::Unknown);
        assert_eq!(Sign::from_entries(&[0.0]), Sign::Positive);
        assert_eq!(Sign::from_entries(&[f64::NAN]), Sign::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Sign::Positive.to_string(), "non-negative");
        assert_eq!(Sign::Unknown.to_string(), "unknown");
    }
}
