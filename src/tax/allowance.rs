//! Personal allowance taper.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Personal allowance for a taxable income.
///
/// Income at or below the lower limit is all allowance. Above it the
/// allowance starts from the lower limit and shrinks by £1 for every £2 of
/// income over the upper limit, floored at zero.
pub fn personal_allowance(
    taxable_income: Decimal,
    lower_limit: Decimal,
    upper_limit: Decimal,
) -> Decimal {
    if taxable_income <= lower_limit {
        return taxable_income;
    }

    let excess = (taxable_income - upper_limit).max(Decimal::ZERO);
    (lower_limit - excess / dec!(2)).max(Decimal::ZERO)
}
