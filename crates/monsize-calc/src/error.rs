//! Calculator error types.

/// Error raised when monitor input fails validation.
///
/// Validation happens where a configuration is built from user input or
/// catalog data. The pure calculator functions never return these for
/// malformed numbers; they assume validated input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// Aspect ratio is not two positive numbers separated by `:`.
    #[error("invalid aspect ratio {0:?}: expected W:H with positive numbers")]
    InvalidAspectRatio(String),
    /// Diagonal is zero, negative, or not finite.
    #[error("invalid diagonal {0}: must be a positive finite number of inches")]
    InvalidDiagonal(f64),
    /// Resolution is not two positive integers separated by `x`.
    #[error("invalid resolution {0:?}: expected WxH with positive integers")]
    InvalidResolution(String),
    /// Compact monitor description could not be split into its fields.
    #[error("invalid monitor description {0:?}: expected name;diagonal;WxH;W:H")]
    InvalidDescription(String),
    /// Scale factor requested for zero configurations.
    #[error("cannot compute a shared scale factor for an empty configuration set")]
    EmptyConfigurationSet,
}
