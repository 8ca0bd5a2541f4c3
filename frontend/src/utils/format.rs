use crate::data::types::{Money, MAX_AMOUNT};
use crate::error::AppError;

/// `$75,000` style amount, negative values as `-$1,200`.
pub fn currency(amount: Money) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Whole amount within `MAX_AMOUNT` either side of zero.
pub fn parse_amount(input: &str, field: &str) -> Result<Money, AppError> {
    let amount = input
        .trim()
        .parse::<Money>()
        .map_err(|_| AppError::validation(format!("{} must be a whole number", field)))?;
    if amount.unsigned_abs() > MAX_AMOUNT.unsigned_abs() {
        return Err(AppError::validation(format!(
            "{} must be at most {}",
            field,
            currency(MAX_AMOUNT)
        )));
    }
    Ok(amount)
}

/// Sum that reports overflow instead of wrapping.
pub fn total_amount<I>(amounts: I) -> Result<Money, AppError>
where
    I: IntoIterator<Item = Money>,
{
    amounts
        .into_iter()
        .try_fold(0, Money::checked_add)
        .ok_or_else(out_of_range)
}

pub fn out_of_range() -> AppError {
    AppError::validation("Amount total is out of range")
}

/// `total / count` rounded half up; zero when `count` is zero.
pub fn average_half_up(total: Money, count: usize) -> Money {
    let Ok(count) = Money::try_from(count) else {
        return 0;
    };
    if count == 0 {
        return 0;
    }
    let (quotient, remainder) = (total.div_euclid(count), total.rem_euclid(count));
    if remainder >= count - remainder {
        quotient + 1
    } else {
        quotient
    }
}

/// Annual amount spread over twelve months, rounded half up.
pub fn monthly_from_annual(annual: Money) -> Money {
    average_half_up(annual, 12)
}

/// Share of `part` in `total` as a 0-100 width, 0 when there is nothing to divide.
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
