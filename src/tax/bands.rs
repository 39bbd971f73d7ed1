//! Tax band thresholds, keyed by tax year.
//!
//! Threshold values can be found at:
//!
//! - <https://www.gov.uk/income-tax-rates>
//! - <https://www.gov.uk/government/collections/rates-and-allowances-hm-revenue-and-customs>

use super::year::{TaxYear, UnknownTaxYear};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// Band table shipped with the crate.
const TAX_BANDS_CSV: &str = include_str!("tax-bands.csv");

/// Annualized band thresholds for a given tax year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxBands {
    /// Income below this is not taxed (before any taper).
    pub personal_allowance: Decimal,
    /// Income above this erodes the personal allowance.
    pub income_limit_for_personal_allowance: Decimal,
    pub tax_basic_rate_limit: Decimal,
    pub tax_higher_rate_limit: Decimal,
    pub ni_primary_threshold: Decimal,
    pub ni_upper_earnings_limit: Decimal,
}

#[derive(Debug, thiserror::Error)]
pub enum BandsError {
    /// The provider's table has no row for a supported year.
    #[error("no tax bands for year {0}")]
    NoBandsForYear(TaxYear),
    #[error("band table row has {0}")]
    UnknownYear(#[from] UnknownTaxYear),
    #[error("invalid band table: {0}")]
    Table(#[from] csv::Error),
}

/// Source of band thresholds: given a tax year, return its bands or fail.
pub trait BandsProvider {
    fn bands(&self, tax_year: TaxYear) -> Result<TaxBands, BandsError>;
}

/// CSV row of the band table. NI thresholds are weekly, as HMRC publishes
/// them; they are annualized on load.
#[derive(Debug, Deserialize)]
struct BandRecord {
    tax_year: String,
    personal_allowance: Decimal,
    income_limit_for_personal_allowance: Decimal,
    tax_basic_rate_limit: Decimal,
    tax_higher_rate_limit: Decimal,
    ni_primary_threshold: Decimal,
    ni_upper_earnings_limit: Decimal,
}

/// Band table provider backed by a CSV table.
#[derive(Debug, Clone)]
pub struct BandTable {
    bands: HashMap<TaxYear, TaxBands>,
}

impl BandTable {
    /// The table shipped with the crate, covering every supported [`TaxYear`].
    pub fn embedded() -> Result<Self, BandsError> {
        Self::from_reader(TAX_BANDS_CSV.as_bytes())
    }

    /// Read a band table from CSV with the same columns as the embedded one.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BandsError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut bands = HashMap::new();
        for record in rdr.deserialize() {
            let record: BandRecord = record?;
            let tax_year: TaxYear = record.tax_year.parse()?;
            bands.insert(
                tax_year,
                TaxBands {
                    personal_allowance: record.personal_allowance,
                    income_limit_for_personal_allowance: record
                        .income_limit_for_personal_allowance,
                    tax_basic_rate_limit: record.tax_basic_rate_limit,
                    tax_higher_rate_limit: record.tax_higher_rate_limit,
                    ni_primary_threshold: record.ni_primary_threshold * dec!(52),
                    ni_upper_earnings_limit: record.ni_upper_earnings_limit * dec!(52),
                },
            );
        }
        log::debug!("Read tax bands for {} years", bands.len());
        Ok(BandTable { bands })
    }
}

impl BandsProvider for BandTable {
    fn bands(&self, tax_year: TaxYear) -> Result<TaxBands, BandsError> {
        self.bands
            .get(&tax_year)
            .cloned()
            .ok_or(BandsError::NoBandsForYear(tax_year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_table_covers_every_supported_year() {
        let table = BandTable::embedded().unwrap();
        for year in TaxYear::ALL {
            table.bands(year).unwrap();
        }
    }

    #[test]
    fn ni_thresholds_are_annualized() {
        let table = BandTable::embedded().unwrap();
        let bands = table.bands(TaxYear::Y2025).unwrap();
        // 242/week and 967/week
        assert_eq!(bands.ni_primary_threshold, dec!(12584));
        assert_eq!(bands.ni_upper_earnings_limit, dec!(50284));
    }

    #[test]
    fn embedded_thresholds_for_2024_2025() {
        let table = BandTable::embedded().unwrap();
        let bands = table.bands(TaxYear::Y2025).unwrap();
        assert_eq!(bands.personal_allowance, dec!(12570));
        assert_eq!(bands.income_limit_for_personal_allowance, dec!(100000));
        assert_eq!(bands.tax_basic_rate_limit, dec!(50270));
        assert_eq!(bands.tax_higher_rate_limit, dec!(125140));
    }

    #[test]
    fn missing_year_is_a_table_integrity_error() {
        let csv = "\
tax_year,personal_allowance,income_limit_for_personal_allowance,tax_basic_rate_limit,tax_higher_rate_limit,ni_primary_threshold,ni_upper_earnings_limit
2024/2025,12570,100000,50270,125140,242,967
";
        let table = BandTable::from_reader(csv.as_bytes()).unwrap();
        let err = table.bands(TaxYear::Y2020).unwrap_err();
        assert!(matches!(err, BandsError::NoBandsForYear(TaxYear::Y2020)));
        assert_eq!(err.to_string(), "no tax bands for year 2019/2020");
    }

    #[test]
    fn unrecognized_year_row_fails_to_load() {
        let csv = "\
tax_year,personal_allowance,income_limit_for_personal_allowance,tax_basic_rate_limit,tax_higher_rate_limit,ni_primary_threshold,ni_upper_earnings_limit
1999/2000,4335,100000,28000,150000,66,500
";
        let err = BandTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, BandsError::UnknownYear(_)));
    }

    #[test]
    fn malformed_threshold_fails_to_load() {
        let csv = "\
tax_year,personal_allowance,income_limit_for_personal_allowance,tax_basic_rate_limit,tax_higher_rate_limit,ni_primary_threshold,ni_upper_earnings_limit
2024/2025,not-a-number,100000,50270,125140,242,967
";
        assert!(matches!(
            BandTable::from_reader(csv.as_bytes()),
            Err(BandsError::Table(_))
        ));
    }
}
