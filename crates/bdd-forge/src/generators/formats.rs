//! Free-form test values without check digits.
//!
//! Each generator takes an optional format selector. Unknown selectors fall
//! back to the default format instead of failing.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Builder;

use super::identifiers::random_digits;

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "test.ru"];
const WORD_LEN: usize = 10;
// 1970-01-01 and 2030-12-31 as days since 0001-01-01.
const FIRST_DAY: i32 = 719_163;
const LAST_DAY: i32 = 741_442;

/// Phone number. Default `89XXXXXXXXX`; `"international"` gives
/// `+7 (9XX) XXX-XX-XX`.
pub fn phone<R: Rng + ?Sized>(rng: &mut R, format: Option<&str>) -> String {
    let digits: String = random_digits(rng, 9)
        .into_iter()
        .filter_map(|d| char::from_digit(d, 10))
        .collect();
    if format == Some("international") {
        let (code, rest) = digits.split_at(2);
        let (first, rest) = rest.split_at(3);
        let (second, third) = rest.split_at(2);
        format!("+7 (9{code}) {first}-{second}-{third}")
    } else {
        format!("89{digits}")
    }
}

/// E-mail address on a reserved test domain.
pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");
    format!("{}@{domain}", word(rng))
}

/// Calendar date between 1970 and 2030. Default `DD.MM.YYYY`; `"iso"` gives
/// `YYYY-MM-DD`.
pub fn date<R: Rng + ?Sized>(rng: &mut R, format: Option<&str>) -> String {
    let day = rng.gen_range(FIRST_DAY..=LAST_DAY);
    let date = NaiveDate::from_num_days_from_ce_opt(day).unwrap_or_default();
    let pattern = if format == Some("iso") {
        "%Y-%m-%d"
    } else {
        "%d.%m.%Y"
    };
    date.format(pattern).to_string()
}

/// Text value. Default is a lowercase word token; `"uuid"` gives a random
/// (version 4) UUID.
pub fn string<R: Rng + ?Sized>(rng: &mut R, format: Option<&str>) -> String {
    if format == Some("uuid") {
        let mut bytes = [0_u8; 16];
        rng.fill(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    } else {
        word(rng)
    }
}

/// Number. Default is an integer in `0..=999_999`; `"float"` gives a value
/// below 10 000 with two decimals.
pub fn number<R: Rng + ?Sized>(rng: &mut R, format: Option<&str>) -> String {
    if format == Some("float") {
        let value: f64 = rng.gen_range(0.0..10_000.0);
        format!("{value:.2}")
    } else {
        rng.gen_range(0..=999_999_u32).to_string()
    }
}

fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..WORD_LEN)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn default_phone_is_national() {
        let value = phone(&mut rng(), None);
        assert_eq!(value.len(), 11);
        assert!(value.starts_with("89"));
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn international_phone_is_grouped() {
        let value = phone(&mut rng(), Some("international"));
        assert!(value.starts_with("+7 (9"), "{value}");
        assert_eq!(value.len(), "+7 (9XX) XXX-XX-XX".len());
        assert_eq!(value.get(7..9), Some(") "));
    }

    #[test]
    fn emails_use_test_domains() {
        let value = email(&mut rng());
        let (local, domain) = value.split_once('@').unwrap_or_default();
        assert_eq!(local.len(), WORD_LEN);
        assert!(EMAIL_DOMAINS.contains(&domain));
    }

    #[rstest]
    #[case(None, '.', 2)]
    #[case(Some("iso"), '-', 4)]
    #[case(Some("rfc2822"), '.', 2)]
    fn dates_follow_selected_format(
        #[case] format: Option<&str>,
        #[case] separator: char,
        #[case] first_separator: usize,
    ) {
        let value = date(&mut rng(), format);
        assert_eq!(value.len(), 10);
        assert_eq!(value.find(separator), Some(first_separator));
    }

    #[test]
    fn iso_dates_stay_in_range() {
        let mut rng = rng();
        for _ in 0..200 {
            let value = date(&mut rng, Some("iso"));
            let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d");
            let year = parsed.map(|d| d.format("%Y").to_string()).unwrap_or_default();
            assert!(("1970".."2031").contains(&year.as_str()), "{value}");
        }
    }

    #[test]
    fn uuid_strings_are_version_four() {
        let value = string(&mut rng(), Some("uuid"));
        let parsed = uuid::Uuid::parse_str(&value).map(|u| u.get_version_num());
        assert_eq!(parsed.ok(), Some(4));
    }

    #[rstest]
    #[case(None)]
    #[case(Some("shout"))]
    fn word_tokens_are_lowercase_letters(#[case] format: Option<&str>) {
        let value = string(&mut rng(), format);
        assert_eq!(value.len(), WORD_LEN);
        assert!(value.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn numbers_default_to_integers() {
        let value = number(&mut rng(), Some("hex"));
        assert!(value.parse::<u32>().is_ok_and(|n| n <= 999_999));
    }

    #[test]
    fn float_numbers_have_two_decimals() {
        let value = number(&mut rng(), Some("float"));
        let (_, decimals) = value.split_once('.').unwrap_or_default();
        assert_eq!(decimals.len(), 2, "{value}");
    }
}
