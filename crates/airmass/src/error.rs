use thiserror::Error;

/// Errors that may occur when selecting an airmass model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AirmassError {
    /// The model name does not match any supported model.
    ///
    /// Names are matched case-insensitively, so this is only returned for
    /// names that are not recognized in any casing.
    #[error("`{model}` is not a valid model for relative airmass")]
    InvalidModel { model: String },
}
