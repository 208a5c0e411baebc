//! Engineering-suffix value codec and database-unit quantization.
//!
//! Netlist values carry single-letter engineering suffixes spanning atto
//! through giga in base-1000 decades, with HSPICE's "x" standing in for
//! mega. Parsing and formatting mirror each other so a formatted value
//! always parses back to itself.

/// Multiplier for a single-letter engineering suffix, if recognized.
///
/// Note "m" is milli, not mega; mega is "x".
fn suffix_multiplier(c: char) -> Option<f64> {
    match c.to_ascii_lowercase() {
        'a' => Some(1e-18),
        'f' => Some(1e-15),
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' => Some(1e-6),
        'm' => Some(1e-3),
        'k' => Some(1e3),
        'x' => Some(1e6),
        'g' => Some(1e9),
        _ => None,
    }
}

/// Parse a magnitude with an optional trailing engineering suffix.
///
/// Empty input yields zero, as does an unparseable mantissa or an
/// unrecognized suffix letter; a missing suffix multiplies by one.
pub fn parse_value(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    // Plain numbers (including scientific notation) take priority so that
    // a trailing digit is never mistaken for a suffix.
    if let Ok(v) = s.parse::<f64>() {
        return v;
    }

    let last = match s.chars().next_back() {
        Some(c) => c,
        None => return 0.0,
    };
    match suffix_multiplier(last) {
        Some(mult) => {
            let mantissa = &s[..s.len() - last.len_utf8()];
            mantissa.parse::<f64>().unwrap_or(0.0) * mult
        }
        None => 0.0,
    }
}

/// Format a magnitude with the engineering suffix that best fits it.
///
/// The decade is chosen base-1000, clamped to atto/giga on under/overflow,
/// and the mantissa is printed in its minimal decimal representation. Zero
/// formats as a literal `0.0` with no suffix; negative values keep their
/// sign on the mantissa.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }

    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e9 {
        (value / 1e9, "g")
    } else if abs >= 1e6 {
        (value / 1e6, "x")
    } else if abs >= 1e3 {
        (value / 1e3, "k")
    } else if abs >= 1.0 {
        (value, "")
    } else if abs >= 1e-3 {
        (value * 1e3, "m")
    } else if abs >= 1e-6 {
        (value * 1e6, "u")
    } else if abs >= 1e-9 {
        (value * 1e9, "n")
    } else if abs >= 1e-12 {
        (value * 1e12, "p")
    } else if abs >= 1e-15 {
        (value * 1e15, "f")
    } else {
        (value * 1e18, "a")
    };

    // Nine decimals on the mantissa sheds unit-conversion noise while
    // keeping far more precision than any database unit needs.
    let mantissa = (scaled * 1e9).round() / 1e9;
    format!("{}{}", mantissa, suffix)
}

/// Round a physical value to the nearest integer multiple of `step`.
pub fn quantize(value: f64, step: f64) -> i64 {
    (value / step).round() as i64
}
