use std::error::Error;

/// Base trait for all application errors
pub trait TabstackError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type TabstackResult<T> = Result<T, Box<dyn TabstackError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabstack_result() {
        let _result: TabstackResult<i32> = Ok(42);
    }
}
