use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as a US-dollar currency string
///
/// The output has:
/// - A leading `-` for negative amounts, placed before the `$`
/// - Comma thousands separators
/// - Exactly two decimal places, rounded half away from zero
///
/// `32402.19` becomes `$32,402.19` and `-2420.19` becomes `-$2,420.19`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded);

    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, group_thousands(whole), cents)
}

/// Insert a comma between every group of three digits, counting from the right
fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Uppercase the first character of a label, leaving the rest unchanged
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
