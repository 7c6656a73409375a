//! Credit Schedule CLI
//!
//! Computes the payment schedule for a mortgage credit scenario and prints
//! it as a table, writing the full schedule to CSV.
//! Supports JSON output for API integration via the --json flag.
//! Accepts the scenario via environment variables:
//!   ANNUAL_RATE, COK_RATE, AMOUNT_PAYMENTS, PROPERTY_VALUE, LOAN_AMOUNT,
//!   LIEN_INSURANCE, ALL_RISK_INSURANCE, PHYSICAL_SHIPPING,
//!   GOOD_PAYER_BONUS, GREEN_BONUS, RATE_KIND ("effective" or "nominal")

use anyhow::Context;
use credit_schedule::credit::GracePeriod;
use credit_schedule::store::{InMemoryCreditStore, StaticLookups};
use credit_schedule::{CreditRequest, CreditService};
use std::env;
use std::fs::File;
use std::io::Write;

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");

    // Default scenario: the documented sample credit
    let request = CreditRequest {
        rate: env_f64("ANNUAL_RATE", 10.5),
        cok_rate: env_f64("COK_RATE", 20.0),
        amount_payments: env_u32("AMOUNT_PAYMENTS", 240),
        property_value: env_f64("PROPERTY_VALUE", 200_000.0),
        loan_amount: env_f64("LOAN_AMOUNT", 150_000.0),
        lien_insurance: env_f64("LIEN_INSURANCE", 0.0280),
        all_risk_insurance: env_f64("ALL_RISK_INSURANCE", 0.30),
        is_physical_shipping: env_bool("PHYSICAL_SHIPPING", true),
        is_good_payer_bonus: env_bool("GOOD_PAYER_BONUS", false),
        is_green_bonus: env_bool("GREEN_BONUS", false),
        grace_period: GracePeriod::default(),
        interest_rate_type: env::var("RATE_KIND").unwrap_or_else(|_| "effective".to_string()),
        currency_name: "sol".to_string(),
        bank_name: "interbank".to_string(),
    };

    let service = CreditService::new(StaticLookups::with_defaults(), InMemoryCreditStore::new());
    let result = service.payment_schedule(&request)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Credit Schedule v0.1.0");
    println!("======================\n");
    println!("Scenario:");
    println!("  Annual Rate: {:.4}% ({})", request.rate, request.interest_rate_type);
    println!("  COK: {:.2}%", request.cok_rate);
    println!("  Payments: {}", request.amount_payments);
    println!("  Property Value: {:.2}", request.property_value);
    println!("  Loan Amount: {:.2}", request.loan_amount);
    println!();

    // Print first 24 periods to console
    println!("Payment Schedule ({} periods):", result.periods.len());
    println!(
        "{:>6} {:>7} {:>7} {:>12} {:>10} {:>10} {:>8} {:>8} {:>6} {:>10}",
        "Period", "TEA%", "TEM%", "Balance", "Amort", "Interest", "Lien", "AllRisk", "Comm", "TotalFee"
    );
    println!("{}", "-".repeat(94));

    for row in result.periods.iter().take(24) {
        println!(
            "{:>6} {:>7.2} {:>7.2} {:>12.2} {:>10.2} {:>10.2} {:>8.2} {:>8.2} {:>6.2} {:>10.2}",
            row.period,
            row.annual_rate_pct,
            row.monthly_rate_pct,
            row.opening_balance,
            row.amortization,
            row.interest,
            row.lien_insurance,
            row.all_risk_insurance,
            row.commission,
            row.total_fee,
        );
    }

    if result.periods.len() > 24 {
        println!("... ({} more periods)", result.periods.len() - 24);
    }

    // Write full schedule to CSV
    let csv_path = "schedule_output.csv";
    let mut file = File::create(csv_path).context("Unable to create CSV file")?;

    writeln!(
        file,
        "Period,TEA,TEM,OpeningBalance,Amortization,Interest,LienInsurance,AllRiskInsurance,Commission,TotalFee"
    )?;
    for row in &result.periods {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.period,
            row.annual_rate_pct,
            row.monthly_rate_pct,
            row.opening_balance,
            row.amortization,
            row.interest,
            row.lien_insurance,
            row.all_risk_insurance,
            row.commission,
            row.total_fee,
        )?;
    }

    println!("\nFull schedule written to: {}", csv_path);

    // Print summary
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Periods: {}", summary.total_periods);
    println!("  Total Amortization: {:.2}", summary.total_amortization);
    println!("  Total Interest: {:.2}", summary.total_interest);
    println!("  Total Lien Insurance: {:.2}", summary.total_lien_insurance);
    println!("  Total All-Risk Insurance: {:.2}", summary.total_all_risk_insurance);
    println!("  Total Commission: {:.2}", summary.total_commission);
    println!("  Total Fees: {:.2}", summary.total_fees);
    println!("\n  NPV: {:.2}", result.net_present_value);
    println!("  IRR: {:.2} (not computed in this version)", result.internal_rate_of_return);

    Ok(())
}
