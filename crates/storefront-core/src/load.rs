//! Loading state of a data-backed section.

/// A section's data is either still being fetched or has arrived.
///
/// A failed fetch lands in `Loaded` with an empty value, so there is no
/// error state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loading => None,
            LoadState::Loaded(value) => Some(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Loaded(value) => LoadState::Loaded(f(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state() {
        let pending: LoadState<Vec<u8>> = LoadState::default();
        assert!(pending.is_loading());
        assert_eq!(pending.loaded(), None);

        let done = LoadState::Loaded(vec![1, 2]).map(|v| v.len());
        assert!(!done.is_loading());
        assert_eq!(done.loaded(), Some(&2));
    }
}
