use serde::{Deserialize, Serialize};

/// One recommended game: distinct numbers in ascending order.
///
/// Serializes as a plain array, e.g. `[3, 9, 14, 27, 38, 41]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recommendation(Vec<u8>);

impl Recommendation {
    /// Builds a recommendation from distinct numbers in any order.
    pub(crate) fn from_unsorted(mut numbers: Vec<u8>) -> Self {
        numbers.sort_unstable();
        Self(numbers)
    }

    pub fn numbers(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_on_construction() {
        let rec = Recommendation::from_unsorted(vec![41, 3, 27, 9]);
        assert_eq!(rec.numbers(), &[3, 9, 27, 41]);
        assert!(rec.contains(27));
        assert!(!rec.contains(28));
    }

    #[test]
    fn test_serializes_as_array() {
        let rec = Recommendation::from_unsorted(vec![2, 1, 3]);
        assert_eq!(serde_json::to_string(&rec).unwrap(), "[1,2,3]");
    }
}
