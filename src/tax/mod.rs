pub mod allowance;
pub mod bands;
pub mod income;
pub mod spread;
pub mod year;

// Flat public surface for domain types and functions.
pub use allowance::personal_allowance;
pub use bands::{BandTable, BandsError, BandsProvider, TaxBands};
pub use income::{calculate_tax, calculate_tax_with, Deduction, NetIncome, TaxError};
pub use spread::{contributions, spread_over_checkpoints};
pub use year::{Rates, TaxYear, UnknownTaxYear};
