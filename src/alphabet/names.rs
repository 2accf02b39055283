//! Character to glyph-name resolution
//!
//! Fonts name most glyphs after the letter they draw (`a`, `B`), but
//! punctuation, digits and accented letters use descriptive production
//! names (`period`, `seven`, `odieresis`). Resolution tries a fixed list of
//! rules in order and stops at the first glyph that exists.

/// One way of turning a character into a glyph name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// The character itself is the glyph name
    Exact,
    /// The descriptive production name, e.g. `.` → `period`
    Canonical,
    /// The font's own codepoint mapping
    Codepoint,
}

/// Rules in the order `Alphabet::lookup` applies them
pub const RESOLUTION_ORDER: [NameRule; 3] =
    [NameRule::Exact, NameRule::Canonical, NameRule::Codepoint];

/// Production name for characters whose glyph is not named after themselves
pub fn canonical_name(ch: char) -> Option<&'static str> {
    let name = match ch {
        '.' => "period",
        ',' => "comma",
        ':' => "colon",
        ';' => "semicolon",
        '?' => "question",
        '!' => "exclam",
        '-' => "hyphen",
        '\'' => "quotesingle",
        '"' => "quotedbl",
        '(' => "parenleft",
        ')' => "parenright",
        '&' => "ampersand",
        '/' => "slash",
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        'ä' => "adieresis",
        'ö' => "odieresis",
        'ü' => "udieresis",
        'Ä' => "Adieresis",
        'Ö' => "Odieresis",
        'Ü' => "Udieresis",
        'ß' => "germandbls",
        _ => return None,
    };
    Some(name)
}
