// ============================================================================
// Amount Formatting
// French-locale display strings for monetary amounts
// ============================================================================

use super::amount::Amount;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Narrow no-break space used between digit groups (fr-FR)
const GROUP_SEPARATOR: &str = "\u{202F}";

/// No-break space between the number and the currency symbol
const SYMBOL_SEPARATOR: &str = "\u{00A0}";

/// Display options for [`format_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Render a missing value as "0,00 €" instead of "-"
    pub show_zero: bool,
    /// Append the euro symbol
    pub show_symbol: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_zero: true,
            show_symbol: true,
        }
    }
}

/// Format an amount for display, French locale.
///
/// Produces strings like `1 234,56 €` (narrow no-break grouping, comma
/// decimal separator). A missing value renders as `0,00 €` or `-`
/// depending on `show_zero`.
pub fn format_amount(value: Option<Amount>, options: FormatOptions) -> String {
    let amount = match value {
        Some(amount) => amount,
        None if options.show_zero => Amount::ZERO,
        None => return "-".to_string(),
    };

    let sign = if amount.is_negative() { "-" } else { "" };
    let euros = group_thousands(amount.euros_part().unsigned_abs());
    let centimes = amount.cents_part();

    if options.show_symbol {
        format!("{}{},{:02}{}€", sign, euros, centimes, SYMBOL_SEPARATOR)
    } else {
        format!("{}{},{:02}", sign, euros, centimes)
    }
}

/// Group a euro count into thousands, most significant group first.
fn group_thousands(mut euros: u64) -> String {
    if euros < 1000 {
        return euros.to_string();
    }

    let mut groups = Vec::new();
    while euros >= 1000 {
        groups.push(format!("{:03}", euros % 1000));
        euros /= 1000;
    }
    groups.push(euros.to_string());
    groups.reverse();
    groups.join(GROUP_SEPARATOR)
}

// ============================================================================
// Tests
// ============================================================================
