// ============================================================================
// Words Module
// Integer and money to English words
// ============================================================================
//
// Flow: int_to_words (scale groups) -> three-digit groups -> two-digit
// formatter, then the sentence assembler adds DOLLAR(S), AND and CENT(S).
// Every function is pure; the word tables are immutable statics.

mod groups;
mod sequence;
mod sentence;
mod tables;
mod two_digit;

pub use groups::{int_to_words, int_to_words_with, three_digit_to_words};
pub use sequence::Words;
pub use sentence::{assemble, assemble_with};
pub use tables::{TENS_WORDS, UNIT_WORDS};
pub use two_digit::two_digit_to_words;
