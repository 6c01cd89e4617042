/// State of a remote load that depends on inputs the view may not have yet
///
/// A single enum instead of separate `loading` / `error` / `data` signals, so
/// a view can never show a spinner and an error at the same time.
///
/// ```
/// let mut state = use_signal(|| LoadState::AwaitingInput);
///
/// state.set(LoadState::Loading);
/// // ... later
/// state.set(result.into());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Required inputs are missing, nothing has been requested
    AwaitingInput,

    /// A request is in flight
    Loading,

    /// The latest request succeeded
    Loaded(T),

    /// The latest request failed with a displayable message
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::AwaitingInput
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for LoadState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_waits_for_input() {
        let state: LoadState<u8> = LoadState::default();
        assert_eq!(state, LoadState::AwaitingInput);
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<i32> = Ok::<_, String>(7).into();
        assert_eq!(ok, LoadState::Loaded(7));

        let failed: LoadState<i32> = Err::<i32, _>("boom".to_string()).into();
        assert_eq!(failed, LoadState::Failed("boom".to_string()));
    }
}
