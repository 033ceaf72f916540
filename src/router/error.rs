//! Router error types

use thiserror::Error;

/// Errors raised while configuring the router
///
/// Navigation itself never fails: unknown or unregistered routes are ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Key is not one of the supported route identifiers
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouterError::UnknownRoute("shop".to_string());
        assert_eq!(err.to_string(), "Unknown route: shop");
    }
}
