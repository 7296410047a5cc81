//! Error types for the effect system.
//!
//! Only `Task` can fail at the library level: a fork settles at most once,
//! and a future built from a fork needs the fork to settle at all.

/// Represents a broken settle contract on a forked `Task`.
///
/// # Examples
///
/// ```rust
/// use lambox::effect::SettleError;
///
/// assert_eq!(
///     SettleError::AlreadySettled.to_string(),
///     "task already settled: a fork may reject or resolve only once"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SettleError {
    /// `reject` or `resolve` was called after the fork had already settled.
    #[error("task already settled: a fork may reject or resolve only once")]
    AlreadySettled,
    /// Both handles of a fork were dropped without settling.
    #[error("task abandoned: both handles were dropped without settling")]
    Abandoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abandoned_display() {
        assert_eq!(
            format!("{}", SettleError::Abandoned),
            "task abandoned: both handles were dropped without settling"
        );
    }

    #[test]
    fn test_settle_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<SettleError>();
    }
}
