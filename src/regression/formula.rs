use super::fit::FittedModel;

// ---------------------------------------------------------------------------
// Display text derived from a fitted model
// ---------------------------------------------------------------------------

/// The fitted line as `y = {m}x + {c}`, coefficients shown to two decimals.
pub fn format_equation(model: &FittedModel) -> String {
    format!("y = {:.2}x + {:.2}", model.slope, model.intercept)
}

/// The antiderivative of the fitted line with a symbolic constant `C`.
///
/// The quadratic coefficient is halved at full precision and only then
/// rounded for display.
pub fn format_integral(model: &FittedModel) -> String {
    format!(
        "y = ({:.2})x^2 + ({:.2})x + C",
        model.slope / 2.0,
        model.intercept
    )
}

/// Two decimals with comma thousands separators, e.g. `-1,234,567.89`.
/// Infinite and NaN values are printed as-is.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d as char);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
