// ABOUTME: Renders single-precision values in C-style general notation (`%.Ng`).
// ABOUTME: Chooses fixed or exponential form by decimal exponent and trims trailing zeros.

/// Significant digits used for every exported line.
pub const EXPORT_PRECISION: usize = 4;

/// Format `value` with `precision` significant digits in general notation,
/// matching `printf("%.*g", precision, (double) value)`.
///
/// A precision of zero is treated as one. Non-finite values render as
/// `nan`, `inf` or `-inf`; signed zero keeps its sign.
pub fn format_general(value: f32, precision: usize) -> String {
    let x = f64::from(value);
    let sign = if x.is_sign_negative() { "-" } else { "" };

    if x.is_nan() {
        return format!("{sign}nan");
    }
    if x.is_infinite() {
        return format!("{sign}inf");
    }
    if x == 0.0 {
        return format!("{sign}0");
    }

    let p = precision.max(1);
    let p_exp = i32::try_from(p).unwrap_or(i32::MAX);

    // The exponent must be taken after rounding to `p` digits: 9.9996 at four
    // digits is 1.000e1, which selects fixed notation with no decimals.
    let scientific = format!("{:.*e}", p - 1, x);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= p_exp {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            exp_sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(p_exp - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

/// Strip trailing zeros after the decimal point, then a dangling point.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
