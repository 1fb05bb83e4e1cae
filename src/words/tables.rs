// ============================================================================
// Word Tables
// ============================================================================

/// 0 to 19, each an irregular word
pub const UNIT_WORDS: [&str; 20] = [
    "ZERO",
    "ONE",
    "TWO",
    "THREE",
    "FOUR",
    "FIVE",
    "SIX",
    "SEVEN",
    "EIGHT",
    "NINE",
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
];

/// Indexed by the tens digit
pub const TENS_WORDS: [&str; 10] = [
    "ZERO", "TEN", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

pub const ZERO: &str = "ZERO";
pub const HUNDRED: &str = "HUNDRED";
pub const AND: &str = "AND";

pub const DOLLAR: &str = "DOLLAR";
pub const DOLLARS: &str = "DOLLARS";
pub const CENT: &str = "CENT";
pub const CENTS: &str = "CENTS";
