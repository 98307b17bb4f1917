// 📐 Layout - Fixed-width text formats for ledgers and charts
//
// Every width, filler and caption used by the renderers lives here as a
// named constant. `Layout` and `ChartLayout` carry them as values so the
// settings layer can override them without touching the renderers.

use serde::{Deserialize, Serialize};

// ============================================================================
// LEDGER CONSTANTS
// ============================================================================

/// Width of the centered category header line
pub const HEADER_WIDTH: usize = 30;

/// Character used to pad the header on both sides
pub const HEADER_FILLER: char = '*';

/// Descriptions are truncated and left-justified to this many characters
pub const DESCRIPTION_WIDTH: usize = 23;

/// Amounts are right-justified to this width
pub const AMOUNT_WIDTH: usize = 7;

/// Decimal places shown for each ledger amount
pub const AMOUNT_PRECISION: usize = 2;

// ============================================================================
// CHART CONSTANTS
// ============================================================================

pub const CHART_TITLE: &str = "Percentage spent by category";

/// Distance between two chart rows, in percentage points
pub const CHART_STEP: u8 = 10;

/// Mark drawn in a bar cell
pub const BAR_MARK: char = 'o';

/// Width of the row label ("100", " 90", ...)
pub const LABEL_WIDTH: usize = 3;

/// Width of a single category column
pub const CELL_WIDTH: usize = 3;

// ============================================================================
// LAYOUT VALUES
// ============================================================================

/// Format of a category ledger block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub header_width: usize,
    pub header_filler: char,
    pub description_width: usize,
    pub amount_width: usize,
    pub amount_precision: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            header_width: HEADER_WIDTH,
            header_filler: HEADER_FILLER,
            description_width: DESCRIPTION_WIDTH,
            amount_width: AMOUNT_WIDTH,
            amount_precision: AMOUNT_PRECISION,
        }
    }
}

impl Layout {
    /// Center `text` within `header_width`, padding with `header_filler`.
    ///
    /// When the padding is odd the extra filler goes to the right for an
    /// even width and to the left for an odd width. Text wider than the
    /// header is returned untouched.
    pub fn center(&self, text: &str) -> String {
        let len = text.chars().count();
        if len >= self.header_width {
            return text.to_string();
        }

        let margin = self.header_width - len;
        let left = margin / 2 + (margin & self.header_width & 1);
        let right = margin - left;

        let filler = self.header_filler.to_string();
        format!("{}{}{}", filler.repeat(left), text, filler.repeat(right))
    }

    /// Truncate and left-justify a description to `description_width`
    pub fn description_cell(&self, description: &str) -> String {
        let truncated: String = description.chars().take(self.description_width).collect();
        format!("{:<width$}", truncated, width = self.description_width)
    }

    /// Right-justify an amount with fixed precision
    pub fn amount_cell(&self, amount: f64) -> String {
        format!(
            "{:>width$.prec$}",
            amount,
            width = self.amount_width,
            prec = self.amount_precision
        )
    }
}

/// Format of the spend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub title: String,
    pub step: u8,
    pub bar_mark: char,
}

impl Default for ChartLayout {
    fn default() -> Self {
        ChartLayout {
            title: CHART_TITLE.to_string(),
            step: CHART_STEP,
            bar_mark: BAR_MARK,
        }
    }
}

impl ChartLayout {
    /// Row thresholds from 100 down to 0 inclusive
    pub fn thresholds(&self) -> Vec<u8> {
        let step = self.step.clamp(1, 100);
        let mut rows: Vec<u8> = (0..=100u8).rev().step_by(step as usize).collect();
        if rows.last() != Some(&0) {
            rows.push(0);
        }
        rows
    }
}

// ============================================================================
// TESTS
// ============================================================================
