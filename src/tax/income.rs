//! Income tax, National Insurance and take-home pay calculation.

use super::allowance::personal_allowance;
use super::bands::{BandTable, BandsError, BandsProvider};
use super::spread::contributions;
use super::year::{TaxYear, UnknownTaxYear};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum TaxError {
    #[error(transparent)]
    UnknownTaxYear(#[from] UnknownTaxYear),
    #[error(transparent)]
    Bands(#[from] BandsError),
}

/// An additional salary deduction line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub name: String,
    pub amount: Decimal,
}

/// Net income breakdown for one salary and tax year.
///
/// Construct with [`NetIncome::rounded`]: every monetary field is rounded to
/// the nearest penny (half-up) exactly once, as the final step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetIncome {
    pub salary: Decimal,
    pub tax_year: TaxYear,
    pub pre_tax_adjustments: Decimal,
    pub personal_allowance: Decimal,
    pub taxable_income: Decimal,
    pub tax: Decimal,
    pub national_insurance: Decimal,
    pub other_deductions: Vec<Deduction>,
    pub total_deductions: Decimal,
    pub take_home_pay: Decimal,
}

impl NetIncome {
    /// Round all monetary fields to the nearest penny.
    pub fn rounded(mut self) -> Self {
        self.salary = round_penny(self.salary);
        self.pre_tax_adjustments = round_penny(self.pre_tax_adjustments);
        self.personal_allowance = round_penny(self.personal_allowance);
        self.taxable_income = round_penny(self.taxable_income);
        self.tax = round_penny(self.tax);
        self.national_insurance = round_penny(self.national_insurance);
        for deduction in &mut self.other_deductions {
            deduction.amount = round_penny(deduction.amount);
        }
        self.total_deductions = round_penny(self.total_deductions);
        self.take_home_pay = round_penny(self.take_home_pay);
        self
    }
}

fn round_penny(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate tax and net income for a salary.
///
/// `pre_tax_adjustments` is the total of all yearly pre-tax adjustments
/// (e.g. pension contributions). Uses the band table shipped with the crate;
/// see [`calculate_tax_with`] to supply another [`BandsProvider`].
pub fn calculate_tax(
    tax_year: &str,
    salary: Decimal,
    pre_tax_adjustments: Decimal,
) -> Result<NetIncome, TaxError> {
    let tax_year: TaxYear = tax_year.parse()?;
    calculate_tax_with(&BandTable::embedded()?, tax_year, salary, pre_tax_adjustments)
}

/// Calculate tax and net income using bands from `provider`.
pub fn calculate_tax_with(
    provider: &dyn BandsProvider,
    tax_year: TaxYear,
    salary: Decimal,
    pre_tax_adjustments: Decimal,
) -> Result<NetIncome, TaxError> {
    let bands = provider.bands(tax_year)?;
    let rates = tax_year.rates();

    let salary_less_adjustments = salary - pre_tax_adjustments;
    let personal_allowance = personal_allowance(
        salary_less_adjustments,
        bands.personal_allowance,
        bands.income_limit_for_personal_allowance,
    );
    let tax = contributions(
        salary_less_adjustments,
        &[
            personal_allowance,
            bands.tax_basic_rate_limit,
            bands.tax_higher_rate_limit,
        ],
        &[
            Decimal::ZERO,
            rates.tax_basic,
            rates.tax_higher,
            rates.tax_additional,
        ],
    );
    // NI is charged on the full salary, before pre-tax adjustments
    let national_insurance = contributions(
        salary,
        &[bands.ni_primary_threshold, bands.ni_upper_earnings_limit],
        &[Decimal::ZERO, rates.ni_basic, rates.ni_additional],
    );
    let total_deductions = tax + national_insurance;
    let take_home_pay = salary_less_adjustments - total_deductions;

    log::debug!(
        "{tax_year}: allowance={personal_allowance}, tax={tax}, ni={national_insurance}"
    );

    Ok(NetIncome {
        salary,
        tax_year,
        pre_tax_adjustments,
        personal_allowance,
        taxable_income: salary_less_adjustments - personal_allowance,
        tax,
        national_insurance,
        other_deductions: Vec::new(),
        total_deductions,
        take_home_pay,
    }
    .rounded())
}
