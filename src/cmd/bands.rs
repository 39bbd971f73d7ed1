//! Bands command - threshold table for the supported tax years

use clap::Args;
use payec::tax::{BandTable, BandsProvider, TaxBands, TaxYear};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct BandsCommand {
    /// Tax year to show (e.g. 2024/2025). Shows all years if omitted
    #[arg(short, long)]
    year: Option<String>,

    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

impl BandsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let table = BandTable::embedded()?;
        let years: Vec<TaxYear> = match &self.year {
            Some(year) => vec![year.parse()?],
            None => TaxYear::ALL.to_vec(),
        };

        let rows = years
            .into_iter()
            .map(|year| Ok(BandsRow::new(year, &table.bands(year)?)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&BandsOutput { bands: rows })?
            );
        } else {
            self.print_table(rows);
        }
        Ok(())
    }

    fn print_table(&self, rows: Vec<BandsRow>) {
        println!();
        println!("TAX BANDS (annualized, GBP)");
        println!();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
struct BandsRow {
    #[tabled(rename = "Tax Year")]
    tax_year: String,
    #[tabled(rename = "Allowance")]
    personal_allowance: String,
    #[tabled(rename = "Allowance Limit")]
    income_limit_for_personal_allowance: String,
    #[tabled(rename = "Basic Rate Limit")]
    tax_basic_rate_limit: String,
    #[tabled(rename = "Higher Rate Limit")]
    tax_higher_rate_limit: String,
    #[tabled(rename = "NI Primary")]
    ni_primary_threshold: String,
    #[tabled(rename = "NI Upper")]
    ni_upper_earnings_limit: String,
}

impl BandsRow {
    fn new(year: TaxYear, bands: &TaxBands) -> Self {
        BandsRow {
            tax_year: year.to_string(),
            personal_allowance: format_gbp(bands.personal_allowance),
            income_limit_for_personal_allowance: format_gbp(
                bands.income_limit_for_personal_allowance,
            ),
            tax_basic_rate_limit: format_gbp(bands.tax_basic_rate_limit),
            tax_higher_rate_limit: format_gbp(bands.tax_higher_rate_limit),
            ni_primary_threshold: format_gbp(bands.ni_primary_threshold),
            ni_upper_earnings_limit: format_gbp(bands.ni_upper_earnings_limit),
        }
    }
}

#[derive(Debug, Serialize)]
struct BandsOutput {
    bands: Vec<BandsRow>,
}

fn format_gbp(amount: Decimal) -> String {
    format!("£{:.2}", amount)
}
