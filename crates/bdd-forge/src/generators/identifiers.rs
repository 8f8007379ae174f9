//! Russian registration identifiers with their check-digit rules.
//!
//! Fields are drawn digit by digit, so every generated value is uniformly
//! random within each field width. Only the arithmetic check digits are
//! guaranteed; region and inspection codes are not checked against real
//! registries.

use rand::Rng;

/// Weights for the tenth INN digit (also the control digit of the 10-digit
/// legal-entity form).
pub const INN_N10_WEIGHTS: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];
/// Weights for the eleventh INN digit.
pub const INN_N11_WEIGHTS: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
/// Weights for the twelfth INN digit.
pub const INN_N12_WEIGHTS: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

const KPP_REASON_CODE: [u32; 2] = [0, 1];

/// Weighted sum of `digits` reduced modulo 11 and then modulo 10.
///
/// Digits beyond the weight vector are ignored. The second reduction folds a
/// remainder of 10 onto 0. The sum is reduced term by term, so values outside
/// `0..=9` cannot overflow.
///
/// ```
/// use bdd_forge::generators::{INN_N10_WEIGHTS, weighted_check_digit};
/// assert_eq!(weighted_check_digit(&[7, 7, 0, 7, 0, 8, 3, 8, 9], &INN_N10_WEIGHTS), 3);
/// ```
#[must_use]
pub fn weighted_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .fold(0, |acc, (d, w)| {
            (acc + d.rem_euclid(11) * w.rem_euclid(11)).rem_euclid(11)
        })
        .rem_euclid(10)
}

/// Generate a 12-digit INN.
///
/// A 9-digit base (2-digit region, 2-digit inspection, 5-digit sequence) is
/// followed by three check digits, each computed over everything before it.
pub fn inn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = inn_base(rng);
    for weights in [
        &INN_N10_WEIGHTS[..],
        &INN_N11_WEIGHTS[..],
        &INN_N12_WEIGHTS[..],
    ] {
        digits.push(weighted_check_digit(&digits, weights));
    }
    render(&digits)
}

/// Generate a 10-digit legal-entity INN: the 9-digit base plus its control
/// digit.
pub fn inn_legal<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = inn_base(rng);
    digits.push(weighted_check_digit(&digits, &INN_N10_WEIGHTS));
    render(&digits)
}

fn inn_base<R: Rng + ?Sized>(rng: &mut R) -> Vec<u32> {
    let mut digits = random_digits(rng, 2);
    digits.extend(random_digits(rng, 2));
    digits.extend(random_digits(rng, 5));
    digits
}

/// Generate a 9-digit KPP: region, inspection, reason code `01`, sequence.
pub fn kpp<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = random_digits(rng, 2);
    digits.extend(random_digits(rng, 2));
    digits.extend(KPP_REASON_CODE);
    digits.extend(random_digits(rng, 3));
    render(&digits)
}

/// OGRN control digit: the 12-digit prefix as an integer, modulo 11 then 10.
#[must_use]
pub fn ogrn_check_digit(prefix: u64) -> u64 {
    prefix.rem_euclid(11).rem_euclid(10)
}

/// Generate a 13-digit OGRN: sign `1`, 2-digit year, 2-digit region,
/// 7-digit sequence and the control digit.
pub fn ogrn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = vec![1];
    digits.extend(random_digits(rng, 2));
    digits.extend(random_digits(rng, 2));
    digits.extend(random_digits(rng, 7));
    let prefix = digits
        .iter()
        .fold(0_u64, |acc, d| acc * 10 + u64::from(*d));
    format!("{}{}", render(&digits), ogrn_check_digit(prefix))
}

/// SNILS control number for nine digits.
///
/// Digit `i` (zero-based) is weighted by `9 - i`; the sum is reduced modulo
/// 101 and a result of exactly 100 maps to 0.
///
/// ```
/// use bdd_forge::generators::snils_control;
/// assert_eq!(snils_control(&[1, 1, 2, 2, 3, 3, 4, 4, 5]), 95);
/// assert_eq!(snils_control(&[9, 2, 0, 0, 0, 0, 0, 0, 3]), 0);
/// ```
#[must_use]
pub fn snils_control(digits: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip((1..=9).rev()).map(|(d, w)| d * w).sum();
    match sum.rem_euclid(101) {
        100 => 0,
        control => control,
    }
}

/// Generate a SNILS in its printed form `XXX-XXX-XXX NN`.
pub fn snils<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits = random_digits(rng, 9);
    format_snils(&digits, snils_control(&digits))
}

fn format_snils(digits: &[u32], control: u32) -> String {
    let body = render(digits);
    let groups: Vec<&str> = [0..3, 3..6, 6..9]
        .into_iter()
        .filter_map(|range| body.get(range))
        .collect();
    format!("{} {control:02}", groups.join("-"))
}

/// Whether `value` is a 10- or 12-digit INN with correct check digits.
///
/// A 12-digit value is accepted on its 11th and 12th digits alone. The 10th
/// digit that [`inn`] derives with [`INN_N10_WEIGHTS`] is not checked.
#[must_use]
pub fn is_valid_inn(value: &str) -> bool {
    let Some(digits) = parse_digits(value) else {
        return false;
    };
    let checks: Vec<&[u32]> = match digits.len() {
        10 => vec![&INN_N10_WEIGHTS[..]],
        12 => vec![&INN_N11_WEIGHTS[..], &INN_N12_WEIGHTS[..]],
        _ => return false,
    };
    checks.iter().all(|weights| {
        let position = weights.len();
        match (digits.get(..position), digits.get(position)) {
            (Some(prefix), Some(check)) => weighted_check_digit(prefix, weights) == *check,
            _ => false,
        }
    })
}

/// Whether `value` is a 9-digit KPP.
#[must_use]
pub fn is_valid_kpp(value: &str) -> bool {
    parse_digits(value).is_some_and(|digits| digits.len() == 9)
}

/// Whether `value` is a 13-digit OGRN with a correct control digit.
#[must_use]
pub fn is_valid_ogrn(value: &str) -> bool {
    match (value.get(..12), value.get(12..)) {
        (Some(prefix), Some(check)) if value.len() == 13 && parse_digits(value).is_some() => {
            match (prefix.parse::<u64>(), check.parse::<u64>()) {
                (Ok(prefix), Ok(check)) => ogrn_check_digit(prefix) == check,
                _ => false,
            }
        }
        _ => false,
    }
}

/// Whether `value` is a SNILS with a correct control number.
///
/// Both the printed form and eleven bare digits are accepted.
#[must_use]
pub fn is_valid_snils(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !matches!(c, '-' | ' ')).collect();
    let Some(digits) = parse_digits(&compact) else {
        return false;
    };
    match (digits.get(..9), digits.get(9..)) {
        (Some(body), Some([tens, ones])) => snils_control(body) == tens * 10 + ones,
        _ => false,
    }
}

pub(crate) fn random_digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<u32> {
    (0..count).map(|_| rng.gen_range(0..10)).collect()
}

fn render(digits: &[u32]) -> String {
    digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

fn parse_digits(value: &str) -> Option<Vec<u32>> {
    if value.is_empty() {
        return None;
    }
    value.chars().map(|c| c.to_digit(10)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    const ROUNDS: usize = 500;

    fn digits_of(value: &str) -> Vec<u32> {
        value.chars().filter_map(|c| c.to_digit(10)).collect()
    }

    /// Independent restatement of the INN rule.
    fn expected_check(digits: &[u32], weights: &[u32]) -> u32 {
        let sum: u32 = weights
            .iter()
            .enumerate()
            .map(|(i, w)| w * digits.get(i).copied().unwrap_or_default())
            .sum();
        sum.rem_euclid(11).rem_euclid(10)
    }

    #[test]
    fn generated_inns_satisfy_every_check_digit() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..ROUNDS {
            let value = inn(&mut rng);
            assert_eq!(value.len(), 12, "{value}");
            let d = digits_of(&value);
            assert_eq!(d.get(9).copied(), Some(expected_check(&d, &INN_N10_WEIGHTS)));
            assert_eq!(d.get(10).copied(), Some(expected_check(&d, &INN_N11_WEIGHTS)));
            assert_eq!(d.get(11).copied(), Some(expected_check(&d, &INN_N12_WEIGHTS)));
            assert!(is_valid_inn(&value));
        }
    }

    #[test]
    fn generated_legal_inns_are_valid() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..ROUNDS {
            let value = inn_legal(&mut rng);
            assert_eq!(value.len(), 10);
            assert!(is_valid_inn(&value), "{value}");
        }
    }

    #[test]
    fn generated_ogrns_satisfy_control_digit() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..ROUNDS {
            let value = ogrn(&mut rng);
            assert_eq!(value.len(), 13);
            assert!(value.starts_with('1'));
            let prefix: u64 = value.get(..12).and_then(|p| p.parse().ok()).unwrap_or(u64::MAX);
            let check: u64 = value.get(12..).and_then(|c| c.parse().ok()).unwrap_or(u64::MAX);
            assert_eq!(prefix.rem_euclid(11).rem_euclid(10), check, "{value}");
            assert!(is_valid_ogrn(&value));
        }
    }

    #[test]
    fn generated_snils_values_carry_their_control_number() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..ROUNDS {
            let value = snils(&mut rng);
            assert_eq!(value.len(), 14, "{value}");
            assert_eq!(value.get(3..4), Some("-"));
            assert_eq!(value.get(7..8), Some("-"));
            assert_eq!(value.get(11..12), Some(" "));
            let d = digits_of(&value);
            let sum: u32 = (0..9)
                .map(|i| d.get(i).copied().unwrap_or_default() * (9 - u32::try_from(i).unwrap_or(9)))
                .sum();
            let control = if sum.rem_euclid(101) == 100 { 0 } else { sum.rem_euclid(101) };
            assert_eq!(value.get(12..).and_then(|c| c.parse().ok()), Some(control));
            assert!(is_valid_snils(&value));
        }
    }

    #[test]
    fn snils_maps_hundred_to_zero() {
        let digits = [9, 2, 0, 0, 0, 0, 0, 0, 3];
        let raw: u32 = digits.iter().zip((1..=9).rev()).map(|(d, w)| d * w).sum();
        assert_eq!(raw.rem_euclid(101), 100);
        assert_eq!(snils_control(&digits), 0);
        assert_eq!(format_snils(&digits, 0), "920-000-003 00");
        assert!(is_valid_snils("920-000-003 00"));
    }

    #[test]
    fn generated_kpps_use_reason_code() {
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..ROUNDS {
            let value = kpp(&mut rng);
            assert_eq!(value.len(), 9);
            assert_eq!(value.get(4..6), Some("01"));
            assert!(is_valid_kpp(&value));
        }
    }

    #[test]
    fn weighted_check_digit_tolerates_out_of_range_values() {
        // u32::MAX is 3 modulo 11, so the sum is 3 * 3 + 3 * 2 = 15.
        assert_eq!(weighted_check_digit(&[u32::MAX, u32::MAX], &[u32::MAX, 2]), 4);
        assert_eq!(weighted_check_digit(&[u32::MAX; 64], &[u32::MAX; 64]), 4);
    }

    #[rstest]
    #[case("7707083893", true)]
    #[case("7707083894", false)]
    #[case("770708389", false)]
    #[case("77070838a3", false)]
    #[case("", false)]
    fn validates_inns(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(is_valid_inn(value), valid);
    }

    #[rstest]
    #[case("1000000000000", true)]
    #[case("1000000000001", false)]
    #[case("100000000000", false)]
    #[case("10000000000+0", false)]
    fn validates_ogrns(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(is_valid_ogrn(value), valid);
    }

    #[rstest]
    #[case("112-233-445 95", true)]
    #[case("11223344595", true)]
    #[case("112-233-445 96", false)]
    #[case("112-233-445", false)]
    fn validates_snils(#[case] value: &str, #[case] valid: bool) {
        assert_eq!(is_valid_snils(value), valid);
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let first = inn(&mut StdRng::seed_from_u64(3));
        let second = inn(&mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }
}
