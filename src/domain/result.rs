//! Result type alias for Plantclip

use super::errors::PlantClipError;

/// Result type alias for Plantclip operations
///
/// # Examples
///
/// ```
/// use plantclip::domain::result::Result;
/// use plantclip::domain::errors::PlantClipError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PlantClipError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PlantClipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(PlantClipError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
