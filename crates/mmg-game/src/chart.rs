//! ASCII stock price chart.

use mmg_core::{Price, PriceHistory};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Render the last `width` prices of `history` as a `height`-row chart.
///
/// One column per price, one `*` per column. Rows are labelled with the
/// price level they represent, highest first. A flat series collapses to a
/// single row.
pub fn render_chart(history: &PriceHistory, height: usize, width: usize) -> String {
    let prices = history.tail(width.max(1));
    let lo = prices.iter().copied().min().unwrap_or(Price::ZERO);
    let hi = prices.iter().copied().max().unwrap_or(Price::ZERO);
    let span = (hi - lo).inner();

    let rows = if span.is_zero() { 1 } else { height.max(2) };
    let steps = Decimal::from(rows - 1);

    let levels: Vec<usize> = prices
        .iter()
        .map(|p| {
            if span.is_zero() {
                0
            } else {
                ((p.inner() - lo.inner()) * steps / span)
                    .round()
                    .to_usize()
                    .unwrap_or(0)
            }
        })
        .collect();

    let mut out = String::from("Stock price history\n");
    for row in (0..rows).rev() {
        let label = if span.is_zero() {
            lo
        } else {
            Price::new(lo.inner() + span * Decimal::from(row) / steps).round_cents()
        }
        .to_string();
        let cells: String = levels
            .iter()
            .map(|&level| if level == row { '*' } else { ' ' })
            .collect();
        out.push_str(format!("£{label:>8} |{cells}").trim_end());
        out.push('\n');
    }
    out.push_str(&format!("{:>9} +{}\n", "", "-".repeat(levels.len())));
    out
}
