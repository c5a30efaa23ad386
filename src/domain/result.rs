//! Result type alias for the gateway client
//!
//! Every fallible operation of the crate returns this alias with
//! [`EpdError`] as the error type.

use super::errors::EpdError;

/// Result type alias for gateway operations
///
/// # Examples
///
/// ```
/// use epd_gateway::domain::result::Result;
/// use epd_gateway::domain::errors::{EpdError, InvalidArgument};
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(EpdError::InvalidArgument(InvalidArgument::MissingFile))
/// }
/// ```
pub type Result<T> = std::result::Result<T, EpdError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{EpdError, InvalidArgument};

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert_eq!(value, 42);
        }
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(EpdError::InvalidArgument(InvalidArgument::MissingMetadata));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
