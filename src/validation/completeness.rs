use serde_json::Value;

use crate::models::ClaimForm;

/// Percentage of leaf values in the record that are filled in, independent of
/// whether any rule checked them. Nested objects are descended; every
/// non-object value counts as one leaf.
pub fn completeness_score(form: &ClaimForm) -> f64 {
    let value = match serde_json::to_value(form) {
        Ok(value) => value,
        Err(_) => return 0.0,
    };

    let mut total = 0usize;
    let mut filled = 0usize;
    count_leaves(&value, &mut total, &mut filled);

    if total > 0 {
        filled as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

fn count_leaves(value: &Value, total: &mut usize, filled: &mut usize) {
    match value {
        Value::Object(map) => {
            for nested in map.values() {
                count_leaves(nested, total, filled);
            }
        }
        leaf => {
            *total += 1;
            let is_filled = match leaf {
                Value::String(s) => !s.trim().is_empty(),
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
                Value::Array(items) => !items.is_empty(),
                Value::Object(_) => false,
            };
            if is_filled {
                *filled += 1;
            }
        }
    }
}
