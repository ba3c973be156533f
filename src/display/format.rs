//! Formatting helpers shared by the terminal views

use crate::models::Money;

/// Format a money amount in the configured currency
pub fn money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format a money amount with red/green terminal color hints
pub fn money_colored(amount: Money, symbol: &str) -> String {
    let text = money(amount, symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        text
    }
}

/// Format a percentage with precision scaled to its size
pub fn percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Progress bar of `width` cells; values past 100% render full
pub fn progress_bar(pct: f64, width: usize) -> String {
    if pct <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate to `max_chars` characters with an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_uses_symbol() {
        assert_eq!(money(Money::from_rupees_paise(40_000, 5), "₹"), "₹40000.05");
        assert_eq!(money(Money::from_rupees(-3), "$"), "-$3.00");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(0.05), "0.05%");
        assert_eq!(percentage(5.5), "5.5%");
        assert_eq!(percentage(102.0), "102%");
    }

    #[test]
    fn test_progress_bar() {
        let bar = progress_bar(50.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(progress_bar(250.0, 4), "████");
        assert_eq!(progress_bar(0.0, 3), "░░░");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
        assert_eq!(truncate("Hi", 5), "Hi");
    }
}
