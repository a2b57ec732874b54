//! Post-render decoration of field markup.
//!
//! Rendering and escaping belong to the host. [`ValidationDecorator`] only
//! appends an empty, hidden container that client-side validation fills with
//! error text for a field.

/// Escapes a value for use inside a double-quoted HTML attribute.
pub trait EscapeAttr {
    /// Return `value` escaped for attribute context.
    fn escape_attr(&self, value: &str) -> String;
}

impl<F> EscapeAttr for F
where
    F: Fn(&str) -> String,
{
    fn escape_attr(&self, value: &str) -> String {
        self(value)
    }
}

/// Appends a validation error container after rendered field markup.
///
/// # Examples
///
/// ```rust
/// use field_decor::ValidationDecorator;
///
/// let html = ValidationDecorator::default().decorate(
///     r#"<input name="email">"#,
///     "email",
///     &|value: &str| value.replace('"', "&quot;"),
/// );
/// assert_eq!(
///     html,
///     r#"<input name="email"><div class="field-error" data-field="email" style="display: none;"></div>"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationDecorator {
    error_class: String,
}

impl ValidationDecorator {
    /// Class used when none is given.
    pub const DEFAULT_ERROR_CLASS: &'static str = "field-error";

    /// Create a decorator emitting containers with `error_class`.
    #[must_use]
    pub fn new(error_class: impl Into<String>) -> Self {
        Self {
            error_class: error_class.into(),
        }
    }

    /// Class applied to the error container.
    #[must_use]
    pub fn error_class(&self) -> &str {
        &self.error_class
    }

    /// Append the error container for `field_key` to `html`.
    ///
    /// The class and the key are both passed through `escaper`; `html` is
    /// kept as given.
    #[must_use]
    pub fn decorate(&self, html: &str, field_key: &str, escaper: &impl EscapeAttr) -> String {
        let class = escaper.escape_attr(&self.error_class);
        let key = escaper.escape_attr(field_key);
        format!(r#"{html}<div class="{class}" data-field="{key}" style="display: none;"></div>"#)
    }
}

impl Default for ValidationDecorator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ERROR_CLASS)
    }
}
