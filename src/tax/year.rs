use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// UK Tax Year (runs 6 April to 5 April)
/// The variant year is the end year (e.g., `Y2025` = 2024/2025 tax year).
///
/// The set is closed: only years with a row in the band table are
/// representable, so an invalid year is caught when parsing rather than
/// surfacing as a missing-data failure mid-calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaxYear {
    #[serde(rename = "2019/2020")]
    Y2020,
    #[serde(rename = "2020/2021")]
    Y2021,
    #[serde(rename = "2021/2022")]
    Y2022,
    #[serde(rename = "2022/2023")]
    Y2023,
    #[serde(rename = "2023/2024")]
    Y2024,
    #[serde(rename = "2024/2025")]
    Y2025,
}

/// Tax year string was not one of the supported years.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tax year: {0}")]
pub struct UnknownTaxYear(pub String);

impl TaxYear {
    /// All supported tax years, oldest first.
    pub const ALL: [TaxYear; 6] = [
        TaxYear::Y2020,
        TaxYear::Y2021,
        TaxYear::Y2022,
        TaxYear::Y2023,
        TaxYear::Y2024,
        TaxYear::Y2025,
    ];

    /// Display as "2024/2025" format
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxYear::Y2020 => "2019/2020",
            TaxYear::Y2021 => "2020/2021",
            TaxYear::Y2022 => "2021/2022",
            TaxYear::Y2023 => "2022/2023",
            TaxYear::Y2024 => "2023/2024",
            TaxYear::Y2025 => "2024/2025",
        }
    }

    /// The tax year containing `date`, if it is a supported year.
    pub fn from_date(date: NaiveDate) -> Option<TaxYear> {
        let year = date.year();
        // Tax year starts 6 April
        // If date is 6 April or later, it's in the tax year ending next April
        let end_year = if date >= NaiveDate::from_ymd_opt(year, 4, 6)? {
            year + 1
        } else {
            year
        };
        match end_year {
            2020 => Some(TaxYear::Y2020),
            2021 => Some(TaxYear::Y2021),
            2022 => Some(TaxYear::Y2022),
            2023 => Some(TaxYear::Y2023),
            2024 => Some(TaxYear::Y2024),
            2025 => Some(TaxYear::Y2025),
            _ => None,
        }
    }

    /// Income tax and National Insurance rates for this tax year.
    ///
    /// The supported years all share the same table. NI rates in particular
    /// moved around before 2024/25; the lookup keys on tax year so a
    /// divergent year becomes a data change here rather than an engine
    /// change.
    pub fn rates(&self) -> Rates {
        Rates {
            tax_basic: dec!(0.20),
            tax_higher: dec!(0.40),
            tax_additional: dec!(0.45),
            ni_basic: dec!(0.08),
            ni_additional: dec!(0.02),
        }
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaxYear {
    type Err = UnknownTaxYear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaxYear::ALL
            .into_iter()
            .find(|year| year.as_str() == s)
            .ok_or_else(|| UnknownTaxYear(s.to_string()))
    }
}

/// Marginal rates applied to the band portions of a tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rates {
    pub tax_basic: Decimal,
    pub tax_higher: Decimal,
    pub tax_additional: Decimal,
    pub ni_basic: Decimal,
    pub ni_additional: Decimal,
}
