//! Built-in decorators for text, select and checkbox fields.
//!
//! | Decorator | Field type | Mutation | Priority |
//! |---|---|---|---|
//! | [`InputTypeDecorator`] | `text` | `setInputType` | 15 |
//! | [`PlaceholderDecorator`] | `text` | `setPlaceholder` | 20 |
//! | [`PatternDecorator`] | `text` | `setPattern` | 25 |
//! | [`SelectPlaceholderDecorator`] | `select` | `setPlaceholder` | 5 |
//! | [`SelectSizeDecorator`] | `select` | `setSize` | 25 |
//! | [`UncheckedValueDecorator`] | `checkbox` | `setUncheckedValue` | 15 |

mod checkbox;
mod select;
mod text;

pub use checkbox::UncheckedValueDecorator;
pub use select::{SelectPlaceholderDecorator, SelectSizeDecorator};
pub use text::{InputTypeDecorator, PatternDecorator, PlaceholderDecorator, VALID_INPUT_TYPES};

use serde_json::{Map, Value};

use crate::ConfigMap;

/// Build a delta that sets `key` at the top level and under `attributes`.
///
/// Most modifiers mirror their value into the HTML attribute map so the
/// renderer can emit it directly.
fn mirrored(key: &str, value: Value) -> ConfigMap {
    let mut attributes = Map::new();
    attributes.insert(key.to_owned(), value.clone());
    let mut delta = ConfigMap::with_capacity(2);
    delta.insert(key, value);
    delta.insert("attributes", Value::Object(attributes));
    delta
}
