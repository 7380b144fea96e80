//! Validation trait definition

/// Implemented by every configuration section; the error is a human readable reason
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
