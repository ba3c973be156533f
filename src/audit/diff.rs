//! Field-level summaries for update entries

use std::collections::BTreeSet;

use serde_json::Value;

use crate::models::Money;

const MAX_TEXT_CHARS: usize = 50;

/// Bookkeeping fields that change on every save
const IGNORED_FIELDS: &[&str] = &["updated_at"];

fn is_money_field(key: &str) -> bool {
    key == "amount" || key == "monthly_payment" || key.ends_with("_amount")
}

/// Summarize changed top-level fields as `field: old -> new`, sorted by
/// field name. Returns `None` when nothing worth reporting changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes: Vec<String> = match (before, after) {
        (Value::Object(old), Value::Object(new)) => {
            let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
            keys.into_iter()
                .filter(|key| !IGNORED_FIELDS.contains(&key.as_str()))
                .filter_map(|key| match (old.get(key), new.get(key)) {
                    (Some(a), Some(b)) if a == b => None,
                    (a, b) => Some(format!(
                        "{}: {} -> {}",
                        key,
                        a.map_or_else(|| "(unset)".to_string(), |v| render(key, v)),
                        b.map_or_else(|| "(unset)".to_string(), |v| render(key, v)),
                    )),
                })
                .collect()
        }
        _ if before == after => Vec::new(),
        _ => vec![format!("{} -> {}", render("", before), render("", after))],
    };

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn render(key: &str, value: &Value) -> String {
    match value {
        Value::Number(n) if is_money_field(key) => match n.as_i64() {
            Some(paise) => Money::from_paise(paise).to_string(),
            None => n.to_string(),
        },
        Value::String(s) if s.chars().count() > MAX_TEXT_CHARS => {
            let head: String = s.chars().take(MAX_TEXT_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} rows]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loan_payment_shows_rupees() {
        let before = json!({"title": "Car", "remaining_amount": 1_200_000, "next_payment_date": "2025-03-05"});
        let after = json!({"title": "Car", "remaining_amount": 1_000_000, "next_payment_date": "2025-04-05"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(
            diff,
            "next_payment_date: \"2025-03-05\" -> \"2025-04-05\", \
             remaining_amount: ₹12000.00 -> ₹10000.00"
        );
    }

    #[test]
    fn test_optional_fields_appearing_and_vanishing() {
        let diff = generate_diff(&json!({"deadline": "2025-12-31"}), &json!({"email": "a@b.c"})).unwrap();
        assert!(diff.contains("deadline: \"2025-12-31\" -> (unset)"));
        assert!(diff.contains("email: (unset) -> \"a@b.c\""));
    }

    #[test]
    fn test_timestamp_only_change_is_silent() {
        let before = json!({"display_name": "Ravi", "updated_at": "2025-01-01T00:00:00Z"});
        let after = json!({"display_name": "Ravi", "updated_at": "2025-02-01T00:00:00Z"});
        assert!(generate_diff(&before, &after).is_none());
    }

    #[test]
    fn test_budget_plan_row_count() {
        let diff = generate_diff(&json!([]), &json!([{"amount": 1}, {"amount": 2}])).unwrap();
        assert_eq!(diff, "[0 rows] -> [2 rows]");
    }

    #[test]
    fn test_long_text_cut_on_char_boundary() {
        let long = "₹".repeat(80);
        let diff = generate_diff(&json!({"memo": long}), &json!({"memo": "short"})).unwrap();
        assert!(diff.contains("...\""));
    }
}
