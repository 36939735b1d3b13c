// Number formatting for Ipe path data.
//
// Coordinates are plain integers. The only fractional value Ipe output carries is a circle or
// arc radius, which uses the legacy `####.000` pattern: exactly three fractional digits, no
// zero before the decimal point, ties rounded half-to-even on the exact binary value.

use std::fmt::Write as _;

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

pub fn fmt_point_into(out: &mut String, x: i32, y: i32) {
    let _ = write!(out, "{x} {y}");
}

pub fn fmt_radius(v: f64) -> String {
    let mut out = String::new();
    fmt_radius_into(&mut out, v);
    out
}

pub fn fmt_radius_into(out: &mut String, v: f64) {
    // Callers reject non-finite radii; keep the formatter total anyway.
    if !v.is_finite() {
        out.push_str(".000");
        return;
    }

    // `{:.N}` with N >= 1074 yields the exact decimal expansion, so the rounding below sees
    // the true digits and can tell a real tie from a value just under or over one.
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, v.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        out.push_str(".000");
        return;
    };

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(3))
        .map(|b| b - b'0')
        .collect();
    let tail = &frac_part.as_bytes()[3..];

    let round_up = match tail.first() {
        Some(b'6'..=b'9') => true,
        Some(b'5') => {
            let above_half = tail[1..].iter().any(|&b| b != b'0');
            let last_odd = digits.last().is_some_and(|d| d % 2 == 1);
            above_half || last_odd
        }
        _ => false,
    };
    if round_up {
        increment_digits(&mut digits);
    }

    let frac_start = digits.len() - 3;
    if v.is_sign_negative() && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }
    let int_digits = &digits[..frac_start];
    let first_nonzero = int_digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or(int_digits.len());
    for &d in &int_digits[first_nonzero..] {
        out.push(char::from(b'0' + d));
    }
    out.push('.');
    for &d in &digits[frac_start..] {
        out.push(char::from(b'0' + d));
    }
}

fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}
