//! Calculate command - take-home pay breakdown for a salary

use anyhow::Context;
use chrono::Local;
use clap::Args;
use payec::tax::{calculate_tax_with, BandTable, NetIncome, TaxYear};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// Annual salary before tax and deductions
    #[arg(short, long)]
    salary: Decimal,

    /// Total yearly pre-tax adjustments, e.g. pension contributions
    #[arg(short, long, default_value_t = Decimal::ZERO)]
    adjustments: Decimal,

    /// Tax year (e.g. 2024/2025). Defaults to the tax year containing today
    #[arg(short, long)]
    year: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let tax_year = match &self.year {
            Some(year) => year.parse::<TaxYear>()?,
            None => TaxYear::from_date(Local::now().date_naive())
                .context("today is outside the supported tax years, pass --year")?,
        };
        let bands = BandTable::embedded()?;
        let net = calculate_tax_with(&bands, tax_year, self.salary, self.adjustments)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&net)?);
        } else {
            print_breakdown(&net);
        }
        Ok(())
    }
}

fn print_breakdown(net: &NetIncome) {
    println!();
    println!("TAKE-HOME PAY ({})", net.tax_year);
    println!();

    println!("  Salary: {}", format_gbp(net.salary));
    if !net.pre_tax_adjustments.is_zero() {
        println!(
            "  Pre-tax adjustments: {}",
            format_gbp(net.pre_tax_adjustments)
        );
    }
    println!("  Personal allowance: {}", format_gbp(net.personal_allowance));
    println!("  Taxable income: {}", format_gbp(net.taxable_income));
    println!();

    println!("  Income tax: {}", format_gbp(net.tax));
    println!(
        "  National Insurance: {}",
        format_gbp(net.national_insurance)
    );
    for deduction in &net.other_deductions {
        println!("  {}: {}", deduction.name, format_gbp(deduction.amount));
    }
    println!("  Total deductions: {}", format_gbp(net.total_deductions));
    println!();

    let monthly = (net.take_home_pay / dec!(12)).round_dp(2);
    println!(
        "  Take-home pay: {} ({}/month)",
        format_gbp(net.take_home_pay),
        format_gbp(monthly)
    );
    println!();
}

fn format_gbp(amount: Decimal) -> String {
    format!("£{:.2}", amount)
}
