//! Checked integer narrowing.

use crate::fault::{fault, FaultKind};

/// Narrows `value` into `T`, faulting if it does not fit.
///
/// ```rust
/// let byte: u8 = baz_sys::int::narrow(200);
/// assert_eq!(byte, 200);
/// ```
#[inline]
#[track_caller]
pub fn narrow<T: TryFrom<u64>>(value: u64) -> T {
    match T::try_from(value) {
        Ok(narrowed) => narrowed,
        Err(_) => fault(FaultKind::Narrowing { value }, "narrow"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::Fault;
    use proptest::prelude::*;

    #[test]
    fn test_narrow_in_range() {
        assert_eq!(narrow::<u8>(255), 255u8);
        assert_eq!(narrow::<u16>(65_535), 65_535u16);
        assert_eq!(narrow::<u32>(0), 0u32);
    }

    #[test]
    fn test_narrow_overflow_faults() {
        let payload = std::panic::catch_unwind(|| narrow::<u8>(256)).unwrap_err();
        let fault = payload.downcast_ref::<Fault>().unwrap();
        assert_eq!(fault.kind, FaultKind::Narrowing { value: 256 });
    }

    fn narrows_to<T: TryFrom<u64>>(value: u64) -> bool {
        std::panic::catch_unwind(|| {
            narrow::<T>(value);
        })
        .is_ok()
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256, ..ProptestConfig::default()
        })]
        #[test]
        fn test_narrow_faults_exactly_past_max(
            value in prop_oneof![
                0u64..=300,
                65_400u64..=65_700,
                (u32::MAX as u64 - 100)..=(u32::MAX as u64 + 100),
                any::<u64>(),
            ],
        ) {
            prop_assert_eq!(narrows_to::<u8>(value), value <= u8::MAX as u64);
            prop_assert_eq!(narrows_to::<u16>(value), value <= u16::MAX as u64);
            prop_assert_eq!(narrows_to::<u32>(value), value <= u32::MAX as u64);
            if value <= u16::MAX as u64 {
                prop_assert_eq!(u64::from(narrow::<u16>(value)), value);
            }
        }
    }
}
