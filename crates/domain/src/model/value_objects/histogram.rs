use std::collections::BTreeMap;

use quality_probe_shared_kernel::CcGrade;
use serde::{Deserialize, Serialize};

/// Count per complexity grade. All six grades are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<CcGrade, usize>", into = "BTreeMap<CcGrade, usize>")]
pub struct GradeHistogram(BTreeMap<CcGrade, usize>);

impl GradeHistogram {
    pub fn new() -> Self {
        Self(CcGrade::ALL.into_iter().map(|grade| (grade, 0)).collect())
    }

    pub fn record(&mut self, grade: CcGrade) {
        *self.0.entry(grade).or_insert(0) += 1;
    }

    pub fn count(&self, grade: CcGrade) -> usize {
        self.0.get(&grade).copied().unwrap_or(0)
    }

    /// Grades in A..F order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (CcGrade, usize)> + '_ {
        self.0.iter().map(|(grade, count)| (*grade, *count))
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

impl Default for GradeHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<CcGrade> for GradeHistogram {
    fn from_iter<I: IntoIterator<Item = CcGrade>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for grade in iter {
            histogram.record(grade);
        }
        histogram
    }
}

impl From<BTreeMap<CcGrade, usize>> for GradeHistogram {
    fn from(counts: BTreeMap<CcGrade, usize>) -> Self {
        let mut histogram = Self::new();
        histogram.0.extend(counts);
        histogram
    }
}

impl From<GradeHistogram> for BTreeMap<CcGrade, usize> {
    fn from(histogram: GradeHistogram) -> Self {
        histogram.0
    }
}
