//! Explicit code tables for wire enumerations

use crate::errors::DomainError;

/// An enumeration whose variants carry stable upstream codes and names
///
/// Codes are looked up in [`CodeTable::ALL`], never derived from variant
/// position, so gaps in the upstream numbering survive a decode/encode
/// cycle unchanged.
pub trait CodeTable: Sized + Copy + 'static {
    /// Human-readable table name used in error messages
    const TABLE: &'static str;

    /// Every variant, in code order
    const ALL: &'static [Self];

    /// The upstream integer code
    fn code(self) -> i32;

    /// The upstream name, e.g. `"INSTALL_FAILED"`
    fn as_str(self) -> &'static str;

    /// Every variant, in code order
    #[must_use]
    fn all() -> &'static [Self] {
        Self::ALL
    }

    /// Look up a variant by integer code
    fn from_code(code: i64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| i64::from(variant.code()) == code)
    }

    /// Look up a variant by its exact upstream name
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|variant| variant.as_str() == name)
    }

    /// Parse user input: a code, or a name in any case with `-` for `_`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnknownCode`] if nothing matches.
    fn parse_lenient(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let found = match trimmed.parse::<i64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Self::from_name(&trimmed.to_ascii_uppercase().replace('-', "_")),
        };
        found.ok_or_else(|| DomainError::unknown_code(Self::TABLE, trimmed))
    }
}
