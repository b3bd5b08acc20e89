//! Ranked table and summary rendering.

use rust_decimal::Decimal;
use takehome_core::TaxResult;
use takehome_core::calculations::common::whole_dollars;

use crate::states::state_name;

/// Renders the ranked results as a table followed by a key-findings summary.
///
/// `top` limits how many rows the table shows; the summary always covers the
/// full result set.
pub fn render(
    results: &[TaxResult],
    top: Option<usize>,
) -> String {
    let shown = top.unwrap_or(results.len()).min(results.len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<22} {:>12} {:>12} {:>12} {:>9} {:>12}\n",
        "#", "State", "Annual", "Monthly", "Biweekly", "Tax rate", "Total tax"
    ));

    for (rank, result) in results[..shown].iter().enumerate() {
        let name: &str = state_name(&result.state).unwrap_or(result.state.as_str());
        out.push_str(&format!(
            "{:<4} {:<22} {:>12} {:>12} {:>12} {:>8.1}% {:>12}\n",
            rank + 1,
            name,
            format_currency(result.take_home.annual),
            format_currency(result.take_home.monthly),
            format_currency(result.take_home.biweekly),
            result.total_tax_rate,
            format_currency(result.total_tax),
        ));
    }

    out.push('\n');
    out.push_str(&summary(results));
    out
}

/// Key findings across the full ranking: best and worst state, the annual
/// spread between them, and the average take-home.
fn summary(results: &[TaxResult]) -> String {
    let (Some(highest), Some(lowest)) = (results.first(), results.last()) else {
        return String::new();
    };

    let difference = highest.take_home.annual - lowest.take_home.annual;
    let total: i64 = results.iter().map(|r| r.take_home.annual).sum();
    let average = whole_dollars(Decimal::from(total) / Decimal::from(results.len() as i64));

    let highest_name: &str = state_name(&highest.state).unwrap_or(highest.state.as_str());
    let lowest_name: &str = state_name(&lowest.state).unwrap_or(lowest.state.as_str());

    format!(
        "Highest take-home: {} at {} ({:.1}% total tax)\n\
         Lowest take-home:  {} at {} ({:.1}% total tax)\n\
         Annual difference: {}\n\
         Average take-home: {}\n",
        highest_name,
        format_currency(highest.take_home.annual),
        highest.total_tax_rate,
        lowest_name,
        format_currency(lowest.take_home.annual),
        lowest.total_tax_rate,
        format_currency(difference),
        format_currency(average),
    )
}

/// Formats a whole-dollar amount with thousands separators (`$70,350`).
fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
