//! Conversions from external error types into `DecorError`.

use figment::Error as FigmentError;

use super::DecorError;

impl From<FigmentError> for DecorError {
    fn from(e: FigmentError) -> Self {
        Self::Gathering(Box::new(e))
    }
}
