//! Loading field definitions from files or a host figment.

use camino::Utf8Path;
use figment::Figment;

use crate::{DecorError, DecorResult, DecorResultExt};

use super::FieldDefinitions;

/// Load definitions from `path`, choosing the parser by extension.
///
/// `.json` files are read with `serde_json`; anything else is parsed as TOML.
/// Both parsers keep document key order, so select `options` appear in the
/// order they were written.
///
/// # Errors
///
/// Returns [`DecorError::File`] when the file cannot be read or parsed.
pub fn load_field_definitions(path: &Utf8Path) -> DecorResult<FieldDefinitions> {
    let data = std::fs::read_to_string(path).map_err(|e| DecorError::file_arc(path, e))?;
    let definitions = match path.extension().map(str::to_ascii_lowercase).as_deref() {
        Some("json") => {
            serde_json::from_str::<FieldDefinitions>(&data).map_err(|e| DecorError::file_arc(path, e))?
        }
        _ => toml::from_str::<FieldDefinitions>(&data).map_err(|e| DecorError::file_arc(path, e))?,
    };
    tracing::debug!(
        path = %path,
        fields = definitions.fields.len(),
        "loaded field definitions"
    );
    Ok(definitions)
}

/// Extract definitions from a host-assembled figment.
///
/// Hosts that layer definition sources with their own providers can hand the
/// result here. Figment stores dictionaries sorted by key, so map ordering
/// inside `config` is not preserved on this path.
///
/// # Errors
///
/// Returns [`DecorError::Gathering`] when extraction fails.
///
/// # Examples
///
/// ```rust
/// use figment::{Figment, providers::{Format, Toml}};
///
/// let figment = Figment::from(Toml::string(r#"
///     [[fields]]
///     key = "rows"
///     type = "select"
///
///     [[fields.decorators]]
///     mutation = "setSize"
///     args = { size = 0 }
/// "#));
/// let definitions = field_decor::extract_field_definitions(&figment)?;
/// let config = definitions.fields[0].build()?;
/// assert_eq!(config.get("size"), Some(&serde_json::json!(1)));
/// # Ok::<_, std::sync::Arc<field_decor::DecorError>>(())
/// ```
pub fn extract_field_definitions(figment: &Figment) -> DecorResult<FieldDefinitions> {
    figment.extract::<FieldDefinitions>().into_decor()
}
