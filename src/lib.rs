//! UK PAYE take-home pay calculator.
//!
//! Computes income tax and National Insurance for an annual salary in a
//! given tax year, with pre-tax adjustments (e.g. pension contributions)
//! taken off before tax. [`calculate_tax`] is the entry point; band
//! thresholds come from the table shipped with the crate, or any
//! [`tax::BandsProvider`] via [`tax::calculate_tax_with`].

pub mod tax;

pub use tax::{calculate_tax, NetIncome, TaxError, TaxYear};
