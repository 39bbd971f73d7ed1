//! Progressive band allocation: splitting an amount over threshold checkpoints.

use rust_decimal::Decimal;

/// Spread a value over a list of ascending checkpoints.
///
/// Checkpoints are the upper bounds of consecutive intervals starting at
/// zero, so `[1, 3, 5]` gives interval widths of 1, 2 and 2. Each interval
/// takes `min(remaining, width)`; whatever is left after the last checkpoint
/// is appended as one trailing portion. For example, 10 spread over
/// `[1, 3, 5]` returns `[1, 2, 2, 5]`.
///
/// The output has one entry per checkpoint, plus the trailing portion only
/// when the value exceeds the last checkpoint. Equal consecutive checkpoints
/// are zero-width intervals and take zero. The portions always sum to the
/// value exactly. `Decimal::MAX` works as an effectively unbounded top
/// checkpoint: it absorbs the whole remainder, so nothing trails it.
pub fn spread_over_checkpoints(value: Decimal, checkpoints: &[Decimal]) -> Vec<Decimal> {
    let mut remaining = value;
    let mut lower = Decimal::ZERO;
    let mut portions = Vec::with_capacity(checkpoints.len() + 1);

    for &checkpoint in checkpoints {
        let portion = remaining.min(checkpoint - lower);
        portions.push(portion);
        remaining -= portion;
        lower = checkpoint;
    }

    if remaining > Decimal::ZERO {
        portions.push(remaining);
    }

    portions
}

/// Contributions due on an amount, given band checkpoints and marginal rates.
///
/// `rates` carries one rate per checkpoint interval plus one for the excess
/// above the last checkpoint. When the amount does not exceed the last
/// checkpoint the spreader yields no excess portion and the final rate goes
/// unused. Used identically for income tax and National Insurance.
pub fn contributions(amount: Decimal, checkpoints: &[Decimal], rates: &[Decimal]) -> Decimal {
    spread_over_checkpoints(amount, checkpoints)
        .into_iter()
        .zip(rates)
        .map(|(portion, rate)| portion * rate)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn value_above_last_checkpoint_leaves_trailing_portion() {
        let portions = spread_over_checkpoints(dec!(10), &[dec!(1), dec!(2), dec!(3)]);
        assert_eq!(portions, vec![dec!(1), dec!(1), dec!(1), dec!(7)]);
    }

    #[test]
    fn equal_checkpoints_take_zero_width_portions() {
        let portions = spread_over_checkpoints(dec!(5), &[dec!(1), dec!(1), dec!(1)]);
        assert_eq!(portions, vec![dec!(1), dec!(0), dec!(0), dec!(4)]);

        let portions = spread_over_checkpoints(dec!(10), &[dec!(4), dec!(4), dec!(4)]);
        assert_eq!(portions, vec![dec!(4), dec!(0), dec!(0), dec!(6)]);
    }

    #[test]
    fn value_below_first_checkpoint_fills_first_portion_only() {
        let checkpoints = [dec!(2), dec!(2), dec!(2), dec!(2), dec!(2)];
        let portions = spread_over_checkpoints(dec!(1), &checkpoints);
        assert_eq!(
            portions,
            vec![dec!(1), dec!(0), dec!(0), dec!(0), dec!(0)]
        );
    }

    #[test]
    fn unbounded_top_checkpoint_absorbs_the_rest() {
        let portions = spread_over_checkpoints(dec!(2), &[dec!(1), dec!(2), Decimal::MAX]);
        assert_eq!(portions, vec![dec!(1), dec!(1), dec!(0)]);
    }

    #[test]
    fn value_exactly_consuming_checkpoints_has_no_trailing_portion() {
        let portions = spread_over_checkpoints(dec!(3), &[dec!(1), dec!(2), dec!(3)]);
        assert_eq!(portions, vec![dec!(1), dec!(1), dec!(1)]);
    }

    #[test]
    fn portions_sum_to_the_value_exactly() {
        let cases = [
            (dec!(0), vec![dec!(1), dec!(2)]),
            (dec!(0.01), vec![dec!(1), dec!(2)]),
            (dec!(123456.78), vec![dec!(12570), dec!(50270), dec!(125140)]),
            (dec!(99.99), vec![dec!(100)]),
        ];
        for (value, checkpoints) in cases {
            let portions = spread_over_checkpoints(value, &checkpoints);
            let total: Decimal = portions.iter().sum();
            assert_eq!(total, value);
        }
    }

    #[test]
    fn trailing_portion_is_the_exact_remainder() {
        let checkpoints = [dec!(10), dec!(25.5), dec!(40)];
        let portions = spread_over_checkpoints(dec!(100.25), &checkpoints);
        assert_eq!(portions.len(), checkpoints.len() + 1);
        assert_eq!(portions[3], dec!(60.25));
    }

    #[test]
    fn contributions_apply_rates_by_position() {
        let due = contributions(dec!(100), &[dec!(50)], &[dec!(0.1), dec!(0.2)]);
        assert_eq!(due, dec!(15));
    }

    #[test]
    fn contributions_ignore_rates_beyond_the_spread() {
        // 30 never reaches the excess band, so its 90% rate must not apply
        let due = contributions(dec!(30), &[dec!(50)], &[dec!(0.1), dec!(0.9)]);
        assert_eq!(due, dec!(3));
    }

    #[test]
    fn contributions_on_zero_amount_are_zero() {
        let due = contributions(
            dec!(0),
            &[dec!(12570), dec!(50270)],
            &[dec!(0), dec!(0.2), dec!(0.4)],
        );
        assert_eq!(due, dec!(0));
    }
}
