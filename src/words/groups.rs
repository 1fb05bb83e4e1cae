// ============================================================================
// Integer-to-Words Engine
// Scale-group decomposition and the three-digit group formatter
// ============================================================================

use super::sequence::Words;
use super::tables::{AND, HUNDRED, UNIT_WORDS, ZERO};
use super::two_digit::two_digit_words;
use crate::domain::{ScaleTable, MAX_GROUP};
use crate::numeric::{OutOfRange, WordsResult};

/// Words for a three-digit group (0 to 999).
///
/// "AND" joins the hundreds and the remainder only when both are non-zero:
/// 101 is "ONE HUNDRED AND ONE", 100 is "ONE HUNDRED". Zero yields no words;
/// the engine never asks for it.
///
/// # Errors
/// Returns `BeyondScale` if `n > 999`.
pub fn three_digit_to_words(n: u16) -> WordsResult<Words> {
    if n > MAX_GROUP {
        return Err(OutOfRange::BeyondScale {
            value: u64::from(n),
            max: u64::from(MAX_GROUP),
        });
    }

    let mut words = Words::new();
    push_three_digit(n, &mut words);
    Ok(words)
}

/// Caller guarantees `n <= 999`.
fn push_three_digit(n: u16, words: &mut Words) {
    let hundreds = usize::from(n / 100);
    let remainder = (n % 100) as u8;

    if hundreds > 0 {
        words.push(UNIT_WORDS[hundreds]);
        words.push(HUNDRED);
        if remainder > 0 {
            words.push(AND);
        }
    }

    if remainder > 0 {
        words.push(two_digit_words(remainder));
    }
}

/// Words for a non-negative integer using the standard (BILLION) table.
///
/// ```
/// use money_words::words::int_to_words;
///
/// assert_eq!(int_to_words(1_000_001).unwrap().to_string(), "ONE MILLION ONE");
/// ```
///
/// # Errors
/// Returns `BeyondScale` above 999,999,999,999.
pub fn int_to_words(n: u64) -> WordsResult<Words> {
    int_to_words_with(n, ScaleTable::standard())
}

/// Words for a non-negative integer using the given scale table.
///
/// Zero is the single word "ZERO". Otherwise each non-zero scale group is
/// rendered as its three-digit words followed by the scale label, highest
/// tier first, then the trailing units group with no label.
///
/// # Errors
/// Returns `BeyondScale` if `n` exceeds `table.max_value()`.
pub fn int_to_words_with(n: u64, table: &ScaleTable) -> WordsResult<Words> {
    let groups = table.decompose(n)?;

    let mut words = Words::new();
    if n == 0 {
        words.push(ZERO);
        return Ok(words);
    }

    for group in groups {
        push_three_digit(group.count, &mut words);
        if let Some(label) = group.label {
            words.push(label);
        }
    }

    Ok(words)
}
