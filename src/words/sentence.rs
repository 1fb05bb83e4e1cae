// ============================================================================
// Sentence Assembler
// Dollar words, unit labels and the optional cents clause
// ============================================================================

use super::groups::int_to_words_with;
use super::tables::{AND, CENT, CENTS, DOLLAR, DOLLARS};
use super::two_digit::two_digit_to_words;
use crate::domain::ScaleTable;
use crate::numeric::WordsResult;

/// Final sentence for a dollar and cent count, standard (BILLION) table.
///
/// # Errors
/// Returns `BeyondScale` if `cents > 99` or `dollars` is above the table
/// ceiling.
pub fn assemble(dollars: u64, cents: u8) -> WordsResult<String> {
    assemble_with(dollars, cents, ScaleTable::standard())
}

/// Final sentence using the given scale table.
///
/// Exactly one dollar is "DOLLAR", anything else (zero included) is
/// "DOLLARS"; cents follow the same rule. Zero cents adds no clause at all.
pub fn assemble_with(dollars: u64, cents: u8, table: &ScaleTable) -> WordsResult<String> {
    let cents_words = two_digit_to_words(cents)?;
    let mut words = int_to_words_with(dollars, table)?;

    words.push(if dollars == 1 { DOLLAR } else { DOLLARS });

    if cents > 0 {
        words.push(AND);
        words.push(cents_words);
        words.push(if cents == 1 { CENT } else { CENTS });
    }

    Ok(words.to_string())
}
