use std::time::Duration;

use anyhow::Result;
use colored::Colorize;

use crate::logic::simulation::ShiftSummary;

pub fn generate_console_report(summaries: &[ShiftSummary], total_duration: Duration) {
    println!();
    println!("{}", "TavernCraft Shift Results".bright_cyan().bold());
    println!("{}", "=========================".cyan());

    let total_serves: u32 = summaries.iter().map(|s| s.total_serves).sum();
    let total_hits: u32 = summaries.iter().map(|s| s.total_hits).sum();
    println!("Runs: {}", summaries.len());
    println!("Serves: {total_serves} ({total_hits} scored)");
    if total_serves > 0 {
        let rate = f64::from(total_hits) / f64::from(total_serves) * 100.0;
        println!("Overall hit rate: {rate:.1}%");
    }
    println!("Total time: {total_duration:?}");
    println!();

    for summary in summaries {
        let rate = summary.hit_rate() * 100.0;
        let rate_str = format!("{rate:.1}%");
        let rate_colored = if summary.hit_rate() >= 0.75 {
            rate_str.green()
        } else if summary.hit_rate() >= 0.25 {
            rate_str.yellow()
        } else {
            rate_str.red()
        };
        let balance_str = summary.final_balance.to_string();
        let balance_colored = if summary.final_balance >= 0 {
            balance_str.green()
        } else {
            balance_str.red()
        };

        println!(
            "{} {} seed {} ({})",
            summary.strategy.bold(),
            "|".dimmed(),
            summary.seed,
            summary.share_code.dimmed()
        );
        println!(
            "   {} days, {} serves, hit rate {rate_colored}, score {}",
            summary.days, summary.total_serves, summary.final_score
        );
        println!(
            "   balance {balance_colored}, wallet {}, upgrades {}",
            summary.ledger_money, summary.upgrades_owned
        );
        for report in &summary.day_reports {
            println!(
                "   day {}: {}/{} scored, net {}",
                report.day,
                report.hits,
                report.serves,
                if report.settlement.net >= 0 {
                    report.settlement.net.to_string().green()
                } else {
                    report.settlement.net.to_string().red()
                }
            );
        }
        println!();
    }

    if let (Some(best), Some(worst)) = (
        summaries.iter().max_by_key(|s| s.final_balance),
        summaries.iter().min_by_key(|s| s.final_balance),
    ) {
        println!("{}", "Economy Summary".bright_yellow().bold());
        println!("{}", "===============".yellow());
        println!(
            "Best balance: {} ({})",
            best.final_balance.to_string().green(),
            best.strategy
        );
        println!(
            "Worst balance: {} ({})",
            worst.final_balance.to_string().red(),
            worst.strategy
        );
    }
}

/// Print the raw summaries as pretty JSON to stdout.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn generate_json_report(summaries: &[ShiftSummary]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(summaries)?;
    println!("{json_output}");
    Ok(())
}
