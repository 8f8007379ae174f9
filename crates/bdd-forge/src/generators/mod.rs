//! Random test data: Russian registration identifiers and free-form values.
//!
//! Every generator has a seedable form taking `&mut impl Rng`, so tests can
//! reproduce values; [`generate`] uses the thread-local generator.

mod formats;
mod identifiers;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{Error, Result};

pub use formats::{date, email, number, phone, string};
pub use identifiers::{
    INN_N10_WEIGHTS, INN_N11_WEIGHTS, INN_N12_WEIGHTS, inn, inn_legal, is_valid_inn, is_valid_kpp,
    is_valid_ogrn, is_valid_snils, kpp, ogrn, ogrn_check_digit, snils, snils_control,
    weighted_check_digit,
};

/// The kinds of value [`generate`] can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Taxpayer number, 12 digits (10 with the `legal` format).
    Inn,
    /// Tax registration reason code, 9 digits.
    Kpp,
    /// State registration number, 13 digits.
    Ogrn,
    /// Insurance account number, `XXX-XXX-XXX NN`.
    Snils,
    /// Mobile phone number.
    Phone,
    /// E-mail address.
    Email,
    /// Calendar date.
    Date,
    /// Text token or UUID.
    String,
    /// Integer or two-decimal float.
    Number,
}

impl DataType {
    /// Every data type in display order.
    pub const ALL: [Self; 9] = [
        Self::Inn,
        Self::Kpp,
        Self::Ogrn,
        Self::Snils,
        Self::Phone,
        Self::Email,
        Self::Date,
        Self::String,
        Self::Number,
    ];

    /// Lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inn => "inn",
            Self::Kpp => "kpp",
            Self::Ogrn => "ogrn",
            Self::Snils => "snils",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Date => "date",
            Self::String => "string",
            Self::Number => "number",
        }
    }

    /// Whether values of this type carry a checkable control digit.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Inn | Self::Kpp | Self::Ogrn | Self::Snils)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                Error::unknown_variant("data type", s, &names)
            })
    }
}

/// Produce one value of `kind` from `rng`.
///
/// `format` selects a variant rendering: `legal` (or `10`) for a 10-digit
/// INN, `international` for phones, `iso` for dates, `uuid` for strings and
/// `float` for numbers. Unrecognised selectors use the default rendering.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, kind: DataType, format: Option<&str>) -> String {
    match kind {
        DataType::Inn if matches!(format, Some("legal" | "10")) => inn_legal(rng),
        DataType::Inn => inn(rng),
        DataType::Kpp => kpp(rng),
        DataType::Ogrn => ogrn(rng),
        DataType::Snils => snils(rng),
        DataType::Phone => phone(rng, format),
        DataType::Email => email(rng),
        DataType::Date => date(rng, format),
        DataType::String => string(rng, format),
        DataType::Number => number(rng, format),
    }
}

/// Produce one value of `kind` from the thread-local generator.
///
/// ```
/// use bdd_forge::generators::{DataType, generate, is_valid_inn};
/// assert!(is_valid_inn(&generate(DataType::Inn, None)));
/// ```
#[must_use]
pub fn generate(kind: DataType, format: Option<&str>) -> String {
    generate_with(&mut rand::thread_rng(), kind, format)
}

/// Produce `count` values of `kind` from `rng`.
pub fn generate_many<R: Rng + ?Sized>(
    rng: &mut R,
    kind: DataType,
    format: Option<&str>,
    count: usize,
) -> Vec<String> {
    (0..count).map(|_| generate_with(rng, kind, format)).collect()
}

/// Check `value` against the control rule of `kind`.
///
/// For a 12-digit INN only the 11th and 12th digits are checked. A value whose
/// 10th digit differs from what [`inn`] would compute still verifies.
///
/// # Errors
///
/// Returns [`Error::Validation`] when `kind` has no control rule.
pub fn verify(kind: DataType, value: &str) -> Result<bool> {
    let value = value.trim();
    match kind {
        DataType::Inn => Ok(is_valid_inn(value)),
        DataType::Kpp => Ok(is_valid_kpp(value)),
        DataType::Ogrn => Ok(is_valid_ogrn(value)),
        DataType::Snils => Ok(is_valid_snils(value)),
        other => Err(Error::validation(format!(
            "{other} values have no control rule to check"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    #[case("inn", DataType::Inn)]
    #[case(" SNILS ", DataType::Snils)]
    #[case("Number", DataType::Number)]
    fn parses_data_types(#[case] input: &str, #[case] expected: DataType) {
        assert_eq!(input.parse::<DataType>().ok(), Some(expected));
    }

    #[test]
    fn unknown_data_type_lists_the_choices() {
        let err = "passport".parse::<DataType>().err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some(
                "unknown data type 'passport', expected one of: \
                 inn, kpp, ogrn, snils, phone, email, date, string, number"
            )
        );
    }

    #[rstest]
    #[case(Some("legal"), 10)]
    #[case(Some("10"), 10)]
    #[case(None, 12)]
    #[case(Some("individual"), 12)]
    fn inn_format_selects_length(#[case] format: Option<&str>, #[case] len: usize) {
        let value = generate_with(&mut StdRng::seed_from_u64(5), DataType::Inn, format);
        assert_eq!(value.len(), len);
        assert!(is_valid_inn(&value));
    }

    #[test]
    fn checked_types_verify_their_own_output() {
        let mut rng = StdRng::seed_from_u64(23);
        for kind in DataType::ALL.into_iter().filter(|kind| kind.is_checked()) {
            for value in generate_many(&mut rng, kind, None, 50) {
                assert_eq!(verify(kind, &value).ok(), Some(true), "{kind}: {value}");
            }
        }
    }

    #[test]
    fn twelve_digit_inns_verify_without_the_tenth_digit() {
        let mut digits = vec![7, 7, 0, 7, 0, 8, 3, 8, 9];
        assert_eq!(weighted_check_digit(&digits, &INN_N10_WEIGHTS), 3);
        digits.push(4);
        digits.push(weighted_check_digit(&digits, &INN_N11_WEIGHTS));
        digits.push(weighted_check_digit(&digits, &INN_N12_WEIGHTS));
        let value: String = digits.iter().map(u32::to_string).collect();
        assert_eq!(verify(DataType::Inn, &value).ok(), Some(true), "{value}");
    }

    #[test]
    fn unchecked_types_cannot_be_verified() {
        assert!(matches!(
            verify(DataType::Email, "qa@example.com"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn generate_many_honours_count() {
        let values = generate_many(&mut StdRng::seed_from_u64(1), DataType::Phone, None, 4);
        assert_eq!(values.len(), 4);
        assert!(generate_many(&mut StdRng::seed_from_u64(1), DataType::Date, None, 0).is_empty());
    }
}
