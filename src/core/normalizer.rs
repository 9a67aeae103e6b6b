use crate::domain::model::NormalizedNumber;

pub const NANP_COUNTRY_CODE: &str = "+1";

/// Parses any string into NANP-shaped parts. Never fails; unrecognized input
/// comes back with `valid == false` and the bare digits as the national number.
pub fn normalize(raw: &str) -> NormalizedNumber {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let (country_code, national_number, valid) = match digits.len() {
        11 if digits.starts_with('1') => (Some(NANP_COUNTRY_CODE), digits[1..].to_string(), true),
        10 => (Some(NANP_COUNTRY_CODE), digits.clone(), true),
        _ => (None, digits.clone(), false),
    };

    let e164 = country_code.map(|cc| format!("{}{}", cc, national_number));

    NormalizedNumber {
        raw: raw.to_string(),
        digits,
        country_code: country_code.map(str::to_string),
        national_number,
        e164,
        valid,
    }
}

/// Splits a 10-digit national number into `(area_code, exchange)`.
pub fn split_national(national_number: &str) -> (Option<&str>, Option<&str>) {
    if national_number.len() == 10 && national_number.bytes().all(|b| b.is_ascii_digit()) {
        (Some(&national_number[..3]), Some(&national_number[3..6]))
    } else {
        (None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eleven_digits_with_leading_one() {
        let n = normalize("+1 (809) 555-1234");
        assert_eq!(n.digits, "18095551234");
        assert_eq!(n.country_code.as_deref(), Some("+1"));
        assert_eq!(n.national_number, "8095551234");
        assert_eq!(n.e164.as_deref(), Some("+18095551234"));
        assert!(n.valid);
    }

    #[test]
    fn test_ten_digits() {
        let n = normalize("123-456-7890");
        assert_eq!(n.digits, "1234567890");
        assert_eq!(n.national_number, "1234567890");
        assert_eq!(n.e164.as_deref(), Some("+11234567890"));
        assert!(n.valid);
    }

    #[test]
    fn test_eleven_digits_without_leading_one_is_invalid() {
        let n = normalize("28095551234");
        assert!(!n.valid);
        assert_eq!(n.country_code, None);
        assert_eq!(n.e164, None);
        assert_eq!(n.national_number, "28095551234");
    }

    #[test]
    fn test_garbage_input_never_panics() {
        for raw in ["", "abc", "   ", "+", "☎️ call me", "١٢٣٤٥٦٧٨٩٠"] {
            let n = normalize(raw);
            assert!(!n.valid, "{raw:?} should be invalid");
            assert_eq!(n.digits, "");
            assert_eq!(n.national_number, "");
            assert_eq!(n.e164, None);
        }
    }

    #[test]
    fn test_overlong_input_falls_back_to_digits() {
        let n = normalize("1-800-555-1212 ext 42");
        assert_eq!(n.digits, "1800555121242");
        assert_eq!(n.national_number, n.digits);
        assert!(!n.valid);
    }

    #[test]
    fn test_valid_iff_nanp_shape() {
        for len in 0..=13 {
            for lead in ['1', '2'] {
                let raw: String = std::iter::once(lead).chain(std::iter::repeat('3')).take(len).collect();
                let n = normalize(&raw);
                let expected = len == 10 || (len == 11 && lead == '1');
                assert_eq!(n.valid, expected, "len={len} lead={lead}");
                if n.valid {
                    let cc = n.country_code.clone().unwrap();
                    assert_eq!(n.e164, Some(format!("{}{}", cc, n.national_number)));
                }
            }
        }
    }

    #[test]
    fn test_renormalizing_e164_is_stable() {
        for raw in ["(809) 555-1234", "1 888 222 3333", "212.555.0100"] {
            let first = normalize(raw);
            let e164 = first.e164.clone().unwrap();
            let digits_only: String = e164.chars().filter(|c| c.is_ascii_digit()).collect();
            let second = normalize(&digits_only);

            assert_eq!(second.national_number, first.national_number);
            assert_eq!(second.e164, first.e164);
            assert_eq!(normalize(&second.digits).digits, second.digits);
        }
    }

    #[test]
    fn test_split_national() {
        assert_eq!(split_national("8095551234"), (Some("809"), Some("555")));
        assert_eq!(split_national("18095551234"), (None, None));
        assert_eq!(split_national(""), (None, None));
    }
}
