//! Locale-aware ordering for package identifiers.
//!
//! Mirrors the root-locale collation JavaScript tooling uses when it sorts
//! `package.json` sections (`localeCompare`), restricted to what shows up in
//! package identifiers:
//!
//! 1. **Primary**: whitespace and punctuation sort before digits, digits
//!    before letters, letters compare case-insensitively. Punctuation follows
//!    the root collation order (`_` `-` `,` `;` `:` `!` `?` `.` … `@` … `/`),
//!    not ASCII order. Latin-1 accented letters weigh as their base letter,
//!    so `e` `é` `f`. Other non-ASCII letters fall back to code-point order.
//! 2. **Secondary**: on a primary tie, unaccented before accented.
//! 3. **Tertiary**: then lowercase before uppercase.
//! 4. Finally code-point order, so the comparison is total.

use std::cmp::Ordering;

/// Punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight: `(class, value)`.
fn primary(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        return (0, 0);
    }
    if let Some(index) = PUNCTUATION_ORDER.find(c) {
        return (1, index as u32);
    }
    if c.is_ascii_digit() {
        return (2, c as u32);
    }
    if c.is_alphabetic() {
        let folded = c.to_lowercase().next().unwrap_or(c);
        return (3, base_letter(folded).unwrap_or(folded) as u32);
    }
    (4, c as u32)
}

/// Base letter of a lowercase Latin-1 accented letter.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(base)
}

/// Secondary weight: plain letters before accented ones.
fn secondary(c: char) -> u8 {
    let folded = c.to_lowercase().next().unwrap_or(c);
    u8::from(base_letter(folded).is_some())
}

/// Tertiary weight: lowercase (and caseless) before uppercase.
fn tertiary(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Compare two identifiers the way a root-locale `localeCompare` would.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary)
        .cmp(b.chars().map(primary))
        .then_with(|| a.chars().map(secondary).cmp(b.chars().map(secondary)))
        .then_with(|| a.chars().map(tertiary).cmp(b.chars().map(tertiary)))
        .then_with(|| a.cmp(b))
}
