//! Integer digits, formatting and parsing in bases 2 through 36.
//!
//! Formatting writes uppercase digits; parsing accepts either case. Parsers read the
//! longest digit prefix and report how many bytes they consumed, so callers can keep
//! scanning the rest of their input.

use baz_sys::fault::{ensure, FaultKind};

/// Bytes needed to format any `u64` or `i64` in any base: 64 binary digits and a sign.
pub const FMT_BUF_LEN: usize = 65;

#[inline]
#[track_caller]
fn check_radix(radix: u32) {
    ensure(
        (2..=36).contains(&radix),
        FaultKind::InvalidRadix { radix },
        "radix",
    );
}

/// The ASCII digit for `value`, which must be below `radix`.
#[track_caller]
pub fn to_digit(value: u64, radix: u32) -> u8 {
    check_radix(radix);
    ensure(
        value < radix as u64,
        FaultKind::OutOfBounds {
            index: value as usize,
            len: radix as usize,
        },
        "to_digit",
    );

    if value < 10 {
        b'0' + value as u8
    } else {
        b'A' + (value - 10) as u8
    }
}

/// The value of the ASCII digit `byte` in `radix`, if it is one.
#[track_caller]
pub fn from_digit(byte: u8, radix: u32) -> Option<u64> {
    check_radix(radix);

    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    };

    (u32::from(value) < radix).then_some(u64::from(value))
}

#[track_caller]
pub fn is_digit(byte: u8, radix: u32) -> bool {
    from_digit(byte, radix).is_some()
}

/// Formats `value` into the front of `buf`, returning the number of bytes written.
///
/// Faults if `buf` is too short; [`FMT_BUF_LEN`] bytes always suffice.
///
/// ```rust
/// use baz_text::num::{fmt_u64, FMT_BUF_LEN};
///
/// let mut buf = [0u8; FMT_BUF_LEN];
/// let len = fmt_u64(&mut buf, 255, 16);
/// assert_eq!(&buf[..len], b"FF");
/// ```
#[track_caller]
pub fn fmt_u64(buf: &mut [u8], value: u64, radix: u32) -> usize {
    check_radix(radix);

    let mut digits = [0u8; 64];
    let mut start = digits.len();
    let mut rest = value;
    loop {
        start -= 1;
        digits[start] = to_digit(rest % radix as u64, radix);
        rest /= radix as u64;
        if rest == 0 {
            break;
        }
    }

    let digits = &digits[start..];
    ensure(
        digits.len() <= buf.len(),
        FaultKind::BufferTooSmall {
            needed: digits.len(),
            available: buf.len(),
        },
        "fmt_u64",
    );
    buf[..digits.len()].copy_from_slice(digits);
    digits.len()
}

/// Formats `value` with a leading `-` when negative. See [`fmt_u64`].
#[track_caller]
pub fn fmt_i64(buf: &mut [u8], value: i64, radix: u32) -> usize {
    if value >= 0 {
        return fmt_u64(buf, value as u64, radix);
    }

    ensure(
        !buf.is_empty(),
        FaultKind::BufferTooSmall {
            needed: 1,
            available: 0,
        },
        "fmt_i64",
    );
    buf[0] = b'-';
    1 + fmt_u64(&mut buf[1..], value.unsigned_abs(), radix)
}

/// Parses the longest digit prefix of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` if `bytes` does not
/// start with a digit or the value overflows `u64`.
///
/// ```rust
/// use baz_text::num::parse_u64;
///
/// assert_eq!(parse_u64(b"42 apples", 10), Some((42, 2)));
/// assert_eq!(parse_u64(b"ff", 16), Some((255, 2)));
/// assert_eq!(parse_u64(b"apples", 10), None);
/// ```
#[track_caller]
pub fn parse_u64(bytes: &[u8], radix: u32) -> Option<(u64, usize)> {
    check_radix(radix);

    let mut value: u64 = 0;
    let mut consumed = 0;
    for &byte in bytes {
        let Some(digit) = from_digit(byte, radix) else {
            break;
        };
        value = value.checked_mul(radix as u64)?.checked_add(digit)?;
        consumed += 1;
    }

    (consumed > 0).then_some((value, consumed))
}

/// Like [`parse_u64`], with an optional leading `-`.
///
/// A lone `-` is not a number; `i64::MIN` parses.
#[track_caller]
pub fn parse_i64(bytes: &[u8], radix: u32) -> Option<(i64, usize)> {
    match bytes.split_first() {
        Some((b'-', digits)) => {
            let (magnitude, consumed) = parse_u64(digits, radix)?;
            if magnitude > i64::MIN.unsigned_abs() {
                return None;
            }
            Some(((magnitude as i64).wrapping_neg(), consumed + 1))
        }
        _ => {
            let (magnitude, consumed) = parse_u64(bytes, radix)?;
            Some((i64::try_from(magnitude).ok()?, consumed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baz_sys::Fault;
    use proptest::prelude::*;

    fn fmt_u(value: u64, radix: u32) -> Vec<u8> {
        let mut buf = [0u8; FMT_BUF_LEN];
        let len = fmt_u64(&mut buf, value, radix);
        buf[..len].to_vec()
    }

    fn fmt_i(value: i64, radix: u32) -> Vec<u8> {
        let mut buf = [0u8; FMT_BUF_LEN];
        let len = fmt_i64(&mut buf, value, radix);
        buf[..len].to_vec()
    }

    #[test]
    fn test_digits() {
        assert_eq!(to_digit(0, 10), b'0');
        assert_eq!(to_digit(9, 10), b'9');
        assert_eq!(to_digit(10, 16), b'A');
        assert_eq!(to_digit(35, 36), b'Z');

        assert_eq!(from_digit(b'7', 8), Some(7));
        assert_eq!(from_digit(b'8', 8), None);
        assert_eq!(from_digit(b'f', 16), Some(15));
        assert_eq!(from_digit(b'F', 16), Some(15));
        assert_eq!(from_digit(b'g', 16), None);
        assert!(is_digit(b'z', 36));
        assert!(!is_digit(b' ', 36));
    }

    #[test]
    fn test_invalid_radix_faults() {
        let payload = std::panic::catch_unwind(|| parse_u64(b"1", 37)).unwrap_err();
        assert_eq!(
            payload.downcast_ref::<Fault>().unwrap().kind,
            FaultKind::InvalidRadix { radix: 37 }
        );
    }

    #[test]
    fn test_fmt() {
        assert_eq!(fmt_u(0, 10), b"0");
        assert_eq!(fmt_u(1234, 10), b"1234");
        assert_eq!(fmt_u(5, 2), b"101");
        assert_eq!(fmt_u(u64::MAX, 2).len(), 64);
        assert_eq!(fmt_i(-255, 16), b"-FF");
        assert_eq!(fmt_i(i64::MIN, 10), b"-9223372036854775808");
    }

    #[test]
    fn test_fmt_short_buffer_faults() {
        let payload = std::panic::catch_unwind(|| {
            let mut buf = [0u8; 2];
            fmt_u64(&mut buf, 1000, 10)
        })
        .unwrap_err();
        assert_eq!(
            payload.downcast_ref::<Fault>().unwrap().kind,
            FaultKind::BufferTooSmall {
                needed: 4,
                available: 2
            }
        );
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_u64(b"", 10), None);
        assert_eq!(parse_u64(b"x1", 10), None);
        assert_eq!(parse_u64(b"007,", 10), Some((7, 3)));
        assert_eq!(parse_i64(b"-12 ", 10), Some((-12, 3)));
        assert_eq!(parse_i64(b"-", 10), None);
        assert_eq!(parse_i64(b"-x", 10), None);
        assert_eq!(parse_i64(b"-0", 10), Some((0, 2)));
    }

    #[test]
    fn test_parse_overflow_is_none() {
        assert_eq!(parse_u64(b"18446744073709551615", 10), Some((u64::MAX, 20)));
        assert_eq!(parse_u64(b"18446744073709551616", 10), None);
        assert_eq!(parse_i64(b"9223372036854775807", 10), Some((i64::MAX, 19)));
        assert_eq!(parse_i64(b"9223372036854775808", 10), None);
        assert_eq!(parse_i64(b"-9223372036854775808", 10), Some((i64::MIN, 20)));
        assert_eq!(parse_i64(b"-9223372036854775809", 10), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256, ..ProptestConfig::default()
        })]
        #[test]
        fn test_u64_round_trip(
            value in prop_oneof![Just(0u64), Just(u64::MAX), any::<u64>()],
            radix in 2u32..=36,
        ) {
            let text = fmt_u(value, radix);
            prop_assert_eq!(parse_u64(&text, radix), Some((value, text.len())));
        }

        #[test]
        fn test_i64_round_trip(
            value in prop_oneof![Just(0i64), Just(i64::MIN), Just(i64::MAX), any::<i64>()],
            radix in 2u32..=36,
        ) {
            let text = fmt_i(value, radix);
            prop_assert_eq!(parse_i64(&text, radix), Some((value, text.len())));
        }
    }
}
