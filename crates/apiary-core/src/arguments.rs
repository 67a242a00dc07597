//! Argument presence rules.
//!
//! Tool arguments arrive as an arbitrary JSON object. A parameter counts as
//! provided only when its value is a usable scalar:
//!
//! | value                    | result             |
//! |--------------------------|--------------------|
//! | absent, `null`, `""`     | absent             |
//! | non-empty string         | the string         |
//! | number                   | its JSON text      |
//! | boolean                  | `true` / `false`   |
//! | array, object            | absent             |

use serde_json::{Map, Value};

/// Tool arguments keyed by parameter name.
pub type Arguments = Map<String, Value>;

/// Text form of the argument named `name`, or `None` if it is absent.
pub fn argument_text(args: &Arguments, name: &str) -> Option<String> {
    match args.get(name)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
