//! Identifier mangling between layout-tool names and SPICE-safe names.
//!
//! Hierarchical net names carry separators, bus brackets, and other
//! characters that SPICE identifiers cannot, so they are escaped on export
//! and unescaped on import. The escape character `_` doubled means itself;
//! each special character maps to `_` followed by a fixed digit code.
//! [`escape_name`] and [`unescape_name`] are mutual inverses, and a name
//! free of `_` and the special characters escapes to itself.

const ESCAPE: char = '_';

/// Digit code for a character that needs escaping, if any.
fn code_for(c: char) -> Option<char> {
    match c {
        '.' => Some('0'),
        '[' => Some('1'),
        ']' => Some('2'),
        '\'' => Some('3'),
        '(' => Some('4'),
        ')' => Some('5'),
        '<' => Some('6'),
        '>' => Some('7'),
        _ => None,
    }
}

/// Character behind a digit code, if the code is assigned.
fn char_for(code: char) -> Option<char> {
    match code {
        '0' => Some('.'),
        '1' => Some('['),
        '2' => Some(']'),
        '3' => Some('\''),
        '4' => Some('('),
        '5' => Some(')'),
        '6' => Some('<'),
        '7' => Some('>'),
        _ => None,
    }
}

/// Encode an external name into the SPICE-safe alphabet.
pub fn escape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == ESCAPE {
            out.push(ESCAPE);
            out.push(ESCAPE);
        } else if let Some(code) = code_for(c) {
            out.push(ESCAPE);
            out.push(code);
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode a SPICE-safe name back into the external alphabet.
///
/// An escape followed by anything other than a code digit or a second
/// escape passes through unchanged, and a trailing escape with no code is
/// kept as a literal `_` (see [`has_dangling_escape`] for detecting the
/// latter).
pub fn unescape_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some(ESCAPE) => out.push(ESCAPE),
            Some(d) => match char_for(d) {
                Some(orig) => out.push(orig),
                None => {
                    out.push(ESCAPE);
                    out.push(d);
                }
            },
            None => out.push(ESCAPE),
        }
    }
    out
}

/// Whether a name ends in an escape character that starts no escape pair.
///
/// Pairing runs left to right, so this is true exactly when the trailing
/// run of escape characters has odd length.
pub fn has_dangling_escape(name: &str) -> bool {
    name.chars().rev().take_while(|&c| c == ESCAPE).count() % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape_name("a.b"), "a_0b");
        assert_eq!(escape_name("d[3]"), "d_13_2");
        assert_eq!(escape_name("q'"), "q_3");
        assert_eq!(escape_name("f(x)"), "f_4x_5");
        assert_eq!(escape_name("bus<7>"), "bus_67_7");
        assert_eq!(escape_name("a_b"), "a__b");
    }

    #[test]
    fn test_plain_names_are_identity() {
        for name in ["vdd", "net5", "out", ""] {
            assert_eq!(escape_name(name), name);
            assert_eq!(unescape_name(name), name);
        }
    }

    #[test]
    fn test_round_trip() {
        for name in ["a.b.c", "d[3]", "x_y.z", "bus<15>", "f(a')", "___", "_0"] {
            assert_eq!(unescape_name(&escape_name(name)), name, "name {}", name);
        }
    }

    #[test]
    fn test_unescape_passthrough() {
        // Not an assigned code digit: the escape passes through.
        assert_eq!(unescape_name("a_9b"), "a_9b");
        assert_eq!(unescape_name("a_zb"), "a_zb");
    }

    #[test]
    fn test_dangling_escape_kept_literally() {
        assert_eq!(unescape_name("a_"), "a_");
        assert_eq!(unescape_name("a___"), "a__");
    }

    #[test]
    fn test_has_dangling_escape() {
        assert!(has_dangling_escape("a_"));
        assert!(has_dangling_escape("a___"));
        assert!(!has_dangling_escape("a__"));
        assert!(!has_dangling_escape("a_0"));
        assert!(!has_dangling_escape("plain"));
        assert!(!has_dangling_escape(""));
    }
}
