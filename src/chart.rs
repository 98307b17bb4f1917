// 📊 Spend Chart - Relative spending across categories as an ASCII histogram
//
// spend      = total outflow of a category (deposits excluded)
// percentage = floor(spend * 100 / total_spend / 10) * 10
//
// Percentages are always floored to a multiple of ten, never rounded up.
// When nothing was spent at all, every category gets 0%.

use serde::Serialize;

use crate::entities::category::Category;
use crate::layout::{ChartLayout, CELL_WIDTH, LABEL_WIDTH};

// ============================================================================
// SPEND LIST
// ============================================================================

/// Share of total spending attributed to one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendShare {
    /// Floored to the nearest multiple of ten, in [0, 100]
    pub percentage: u8,
    pub name: String,
    pub spent: f64,
}

/// One share per category, in the order given
pub fn spend_list<'a, I>(categories: I) -> Vec<SpendShare>
where
    I: IntoIterator<Item = &'a Category>,
{
    let spending: Vec<(f64, &str)> = categories
        .into_iter()
        .map(|c| (c.spent(), c.name()))
        .collect();
    let total_spend = spending.iter().fold(0.0, |total, (spent, _)| total + spent);

    spending
        .into_iter()
        .map(|(spent, name)| SpendShare {
            percentage: bucket(spent, total_spend),
            name: name.to_string(),
            spent,
        })
        .collect()
}

/// Percentage of `total` taken by `spent`, floored to a multiple of ten
pub fn bucket(spent: f64, total: f64) -> u8 {
    if total.is_nan() || total <= 0.0 {
        return 0;
    }

    let tens = (spent * 100.0 / total / 10.0).floor();
    (tens * 10.0).clamp(0.0, 100.0) as u8
}

// ============================================================================
// CHART RENDERING
// ============================================================================

/// Spend chart for the given categories with the default layout
pub fn create_spend_chart<'a, I>(categories: I) -> String
where
    I: IntoIterator<Item = &'a Category>,
{
    render_spend_chart(&spend_list(categories), &ChartLayout::default())
}

/// Render bars from 100 down to 0, a separator and a vertical name legend.
///
/// The result has no trailing newline.
pub fn render_spend_chart(shares: &[SpendShare], layout: &ChartLayout) -> String {
    let mut chart = String::new();
    chart.push_str(&layout.title);
    chart.push('\n');

    // Bars
    let mark = format!("{:<width$}", layout.bar_mark, width = CELL_WIDTH);
    let blank = " ".repeat(CELL_WIDTH);
    for threshold in layout.thresholds() {
        chart.push_str(&format!("{:>width$}| ", threshold, width = LABEL_WIDTH));
        for share in shares {
            chart.push_str(if share.percentage >= threshold { &mark } else { &blank });
        }
        chart.push('\n');
    }

    // Separator
    chart.push_str(&" ".repeat(LABEL_WIDTH + 1));
    chart.push('-');
    chart.push_str(&"-".repeat(CELL_WIDTH * shares.len()));
    chart.push('\n');

    // Legend, one character of every name per row
    let names: Vec<Vec<char>> = shares.iter().map(|s| s.name.chars().collect()).collect();
    let longest = names.iter().map(Vec::len).max().unwrap_or(0);
    for index in 0..longest {
        chart.push_str(&" ".repeat(LABEL_WIDTH + 2));
        for name in &names {
            let c = name.get(index).copied().unwrap_or(' ');
            chart.push_str(&format!("{:<width$}", c, width = CELL_WIDTH));
        }
        chart.push('\n');
    }

    chart.pop();
    chart
}

// ============================================================================
// TESTS
// ============================================================================
