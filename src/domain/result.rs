//! Result type alias for the scraper

use super::errors::ScraperError;

/// Result type alias using `ScraperError` as the error type
///
/// # Examples
///
/// ```
/// use gmaps_scraper::domain::result::Result;
/// use gmaps_scraper::domain::errors::ScraperError;
///
/// fn needs_key(key: Option<&str>) -> Result<&str> {
///     key.ok_or_else(|| ScraperError::Configuration("API key is missing".to_string()))
/// }
///
/// assert!(needs_key(None).is_err());
/// ```
pub type Result<T> = std::result::Result<T, ScraperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(3)
        }

        let rows = inner()?;
        assert_eq!(rows, 3);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<()> = Err(ScraperError::Export("disk full".to_string()));
        assert!(result.is_err());
    }
}
