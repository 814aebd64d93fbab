use super::error::MergeError;
use super::model::NamedDataset;

// ---------------------------------------------------------------------------
// MergedView – several sources on one label axis
// ---------------------------------------------------------------------------

/// Sources that share one label axis. The per-index total is derived on
/// demand and never stored, so it cannot drift from the sources.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedView {
    sources: Vec<NamedDataset>,
}

impl MergedView {
    /// Merge sources after checking that each one has exactly the labels of
    /// the first, in the same order.
    pub fn merge(sources: Vec<NamedDataset>) -> Result<Self, MergeError> {
        let Some(reference) = sources.first() else {
            return Err(MergeError::NoSources);
        };
        let expected = reference.series.labels();

        for source in &sources[1..] {
            let found = source.series.labels();
            if found.len() != expected.len() {
                return Err(MergeError::LengthMismatch {
                    name: source.name.clone(),
                    reference: reference.name.clone(),
                    expected: expected.len(),
                    found: found.len(),
                });
            }
            if let Some(index) = expected.iter().zip(found).position(|(a, b)| a != b) {
                return Err(MergeError::LabelMismatch {
                    name: source.name.clone(),
                    reference: reference.name.clone(),
                    index,
                    expected: expected[index].clone(),
                    found: found[index].clone(),
                });
            }
        }

        Ok(Self { sources })
    }

    /// Label axis, taken from the first source.
    pub fn labels(&self) -> &[String] {
        self.sources[0].series.labels()
    }

    pub fn sources(&self) -> &[NamedDataset] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.labels().len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels().is_empty()
    }

    /// Sum of every source at `index`, added left to right in source order.
    pub fn total_at(&self, index: usize) -> f64 {
        self.sources
            .iter()
            .fold(0.0, |acc, s| acc + s.series.values()[index])
    }

    /// Derived total for every index.
    pub fn totals(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.total_at(i)).collect()
    }
}
