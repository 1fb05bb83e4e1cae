// ============================================================================
// Two-Digit Formatter
// 0 to 99, hyphenating compound tens
// ============================================================================

use super::tables::{TENS_WORDS, UNIT_WORDS};
use crate::numeric::{OutOfRange, WordsResult};
use std::borrow::Cow;

/// Words for 0 to 99.
///
/// Below twenty the unit word is returned verbatim. Round tens return the
/// tens word alone; everything else is `TENS-UNIT` joined by one hyphen.
///
/// # Errors
/// Returns `BeyondScale` if `n > 99`.
pub fn two_digit_to_words(n: u8) -> WordsResult<Cow<'static, str>> {
    if n > 99 {
        return Err(OutOfRange::BeyondScale {
            value: u64::from(n),
            max: 99,
        });
    }
    Ok(two_digit_words(n))
}

/// Caller guarantees `n <= 99`.
pub(crate) fn two_digit_words(n: u8) -> Cow<'static, str> {
    let n = usize::from(n);
    if n < 20 {
        return Cow::Borrowed(UNIT_WORDS[n]);
    }

    let tens = n / 10;
    let units = n % 10;

    if units == 0 {
        Cow::Borrowed(TENS_WORDS[tens])
    } else {
        Cow::Owned(format!("{}-{}", TENS_WORDS[tens], UNIT_WORDS[units]))
    }
}
