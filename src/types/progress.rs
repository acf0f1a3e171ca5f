//! Progressive outcome vocabulary spoken by the query merger.

use crate::error::DataError;

/// One step in a progressive result sequence.
///
/// A query produces `Loading` (nothing yet), then `Loading` carrying the
/// fast local answer, then exactly one terminal `Success` or `Failure`.
/// `Initial` is produced alone for a blank query. `Failure` keeps the last
/// known stale value so consumers never lose previously displayed data.
#[derive(Debug)]
pub enum Progress<V> {
    Initial,
    Loading(Option<V>),
    Success(V),
    Failure {
        error: DataError,
        value: Option<V>,
    },
}

impl<V> Progress<V> {
    /// The carried value, stale or fresh, if any.
    pub fn value(&self) -> Option<&V> {
        match self {
            Progress::Initial => None,
            Progress::Loading(value) => value.as_ref(),
            Progress::Success(value) => Some(value),
            Progress::Failure { value, .. } => value.as_ref(),
        }
    }

    /// Whether this is the last step of the sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Progress::Success(_) | Progress::Failure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carried_values() {
        assert_eq!(Progress::<u32>::Initial.value(), None);
        assert_eq!(Progress::Loading(Some(3)).value(), Some(&3));
        assert_eq!(Progress::<u32>::Loading(None).value(), None);
        assert_eq!(Progress::Success(7).value(), Some(&7));

        let failure = Progress::Failure {
            error: DataError::new("no data"),
            value: Some(9),
        };
        assert_eq!(failure.value(), Some(&9));
        assert!(failure.is_terminal());
        assert!(!Progress::<u32>::Loading(None).is_terminal());
    }
}
