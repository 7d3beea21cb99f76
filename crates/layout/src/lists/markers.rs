// Converters from an item index to its label text.

/// Bijective base-26 letters: 1 → `a`, 26 → `z`, 27 → `aa`.
///
/// Returns `None` for 0, which has no alphabetic form.
pub fn to_alpha(n: u32, lowercase: bool) -> Option<String> {
    if n == 0 {
        return None;
    }
    let base = if lowercase { b'a' } else { b'A' };
    let mut s = String::new();
    let mut num = n - 1;
    loop {
        s.insert(0, (base + (num % 26) as u8) as char);
        num /= 26;
        if num == 0 {
            break;
        }
        num -= 1;
    }
    Some(s)
}

/// Roman numerals. Values past 3999 repeat `m`.
///
/// Returns `None` for 0, which has no roman form.
pub fn to_roman(n: u32, lowercase: bool) -> Option<String> {
    if n == 0 {
        return None;
    }
    let mut num = n;
    let values = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut result = String::new();
    for &(val, sym) in &values {
        while num >= val {
            result.push_str(sym);
            num -= val;
        }
    }
    if lowercase {
        Some(result)
    } else {
        Some(result.to_uppercase())
    }
}

// The 24 letters of the greek alphabet. Final sigma is a positional form, not a letter.
const GREEK_LOWER: [char; 24] = [
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ', 'τ',
    'υ', 'φ', 'χ', 'ψ', 'ω',
];
const GREEK_UPPER: [char; 24] = [
    'Α', 'Β', 'Γ', 'Δ', 'Ε', 'Ζ', 'Η', 'Θ', 'Ι', 'Κ', 'Λ', 'Μ', 'Ν', 'Ξ', 'Ο', 'Π', 'Ρ', 'Σ', 'Τ',
    'Υ', 'Φ', 'Χ', 'Ψ', 'Ω',
];

/// Zero-based bijective base-24 greek letters: 0 → `α`, 23 → `ω`, 24 → `αα`, 25 → `αβ`.
pub fn to_greek(n: u32, lowercase: bool) -> String {
    let alphabet = if lowercase { &GREEK_LOWER } else { &GREEK_UPPER };
    let mut letters = Vec::new();
    let mut num = n as u64;
    loop {
        letters.push(alphabet[(num % 24) as usize]);
        num /= 24;
        if num == 0 {
            break;
        }
        num -= 1;
    }
    letters.iter().rev().collect()
}
