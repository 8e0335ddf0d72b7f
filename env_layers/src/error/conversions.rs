//! Conversions from external error types into `EnvLayersError`.
//!
//! The reverse direction, for `?` inside `figment::Jail`, is
//! [`crate::ResultIntoFigment`].

use figment::Error as FigmentError;

use super::EnvLayersError;

impl From<FigmentError> for EnvLayersError {
    fn from(e: FigmentError) -> Self {
        Self::Settings(Box::new(e))
    }
}
