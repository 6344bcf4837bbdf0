use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;

use crate::errors::HistogramError;
use crate::stats::RunningStat;
use crate::tsv::round_seven;

pub const DEFAULT_BIN_LABEL: &str = "BIN";
pub const DEFAULT_VALUE_LABEL: &str = "VALUE";

///
/// One bucket of a [RunningHistogram]: an immutable key paired with the
/// running statistic of every value filed under that key.
///
/// Equality, ordering-sensitivity and hashing are all **by key only**: two
/// bins for the same key are the same bin even mid-accumulation. Comparing
/// accumulated contents is a separate, explicit operation
/// ([RunningBin::same_contents]).
///
#[derive(Clone, Debug)]
pub struct RunningBin<K> {
    id: K,
    stat: RunningStat,
}

impl<K> RunningBin<K> {
    pub fn new(id: K) -> Self {
        RunningBin {
            id,
            stat: RunningStat::new(),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn stat(&self) -> &RunningStat {
        &self.stat
    }

    pub fn add_value(&mut self, value: f64) {
        self.stat.push(value);
    }

    /// Full structural comparison (key and accumulated statistics), as
    /// opposed to the key-only `==`.
    pub fn same_contents(&self, other: &Self) -> bool
    where
        K: PartialEq,
    {
        self.id == other.id && self.stat == other.stat
    }
}

impl<K: Display> RunningBin<K> {
    /// Output row for this bin: key, count, mean, variance. Count is plain
    /// integer text; mean and variance follow the seven-digit rounding rule.
    pub fn display_row(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.stat.count().to_string(),
            round_seven(self.stat.mean()),
            round_seven(self.stat.variance()),
        ]
    }
}

impl<K: ToPrimitive + Display> RunningBin<K> {
    /// Numeric projection of the key, for callers that post-process bins
    /// arithmetically. Fails rather than coercing when the key has no exact
    /// enough f64 representation.
    pub fn id_value(&self) -> Result<f64, HistogramError> {
        self.id
            .to_f64()
            .ok_or_else(|| HistogramError::NonNumericKey(self.id.to_string()))
    }
}

impl<K: PartialEq> PartialEq for RunningBin<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: Eq> Eq for RunningBin<K> {}

impl<K: Hash> Hash for RunningBin<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K: Display> Display for RunningBin<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.stat.count())
    }
}

///
/// One bucket of a [CountHistogram]: a key and a plain observation counter,
/// for distributions where only the frequency matters. Same key-only
/// identity contract as [RunningBin].
///
#[derive(Clone, Debug)]
pub struct CountBin<K> {
    id: K,
    count: u64,
}

impl<K> CountBin<K> {
    pub fn new(id: K) -> Self {
        CountBin { id, count: 0 }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn same_contents(&self, other: &Self) -> bool
    where
        K: PartialEq,
    {
        self.id == other.id && self.count == other.count
    }
}

impl<K: ToPrimitive + Display> CountBin<K> {
    pub fn id_value(&self) -> Result<f64, HistogramError> {
        self.id
            .to_f64()
            .ok_or_else(|| HistogramError::NonNumericKey(self.id.to_string()))
    }
}

impl<K: PartialEq> PartialEq for CountBin<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K: Eq> Eq for CountBin<K> {}

impl<K: Hash> Hash for CountBin<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K: Display> Display for CountBin<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.count)
    }
}

///
/// Ordered histogram of running statistics: each distinct key owns a
/// [RunningBin], and iteration is always in ascending key order no matter
/// the insertion order.
///
/// Keys must be `Ord`; a non-natural ordering is expressed by wrapping the
/// key in a newtype with the wanted `Ord` (e.g. `std::cmp::Reverse`).
///
/// Single-writer: one owner mutates the histogram for the duration of a
/// scan, then hands it (by move or shared borrow) to the output layer.
///
#[derive(Clone, Debug)]
pub struct RunningHistogram<K> {
    bin_label: String,
    value_label: String,
    bins: BTreeMap<K, RunningBin<K>>,
}

impl<K: Ord + Clone> RunningHistogram<K> {
    pub fn new(bin_label: impl Into<String>, value_label: impl Into<String>) -> Self {
        RunningHistogram {
            bin_label: bin_label.into(),
            value_label: value_label.into(),
            bins: BTreeMap::new(),
        }
    }

    pub fn bin_label(&self) -> &str {
        &self.bin_label
    }

    pub fn value_label(&self) -> &str {
        &self.value_label
    }

    /// Inserts a zero-observation bin for every key not already present, so
    /// empty bins still show up in the output. Keys that already have a bin
    /// are left untouched.
    pub fn prefill<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.bins
                .entry(key.clone())
                .or_insert_with(|| RunningBin::new(key));
        }
    }

    /// Files `value` under `key`, creating the bin on first sight of the key.
    pub fn add_value(&mut self, key: K, value: f64) {
        match self.bins.get_mut(&key) {
            Some(bin) => bin.add_value(value),
            None => {
                let mut bin = RunningBin::new(key.clone());
                bin.add_value(value);
                self.bins.insert(key, bin);
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&RunningBin<K>> {
        self.bins.get(key)
    }

    /// Bins in ascending key order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &RunningBin<K>> {
        self.bins.values()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

impl<K: Ord + Clone> Default for RunningHistogram<K> {
    fn default() -> Self {
        RunningHistogram::new(DEFAULT_BIN_LABEL, DEFAULT_VALUE_LABEL)
    }
}

// Structural equality for tests: labels plus every bin's key and accumulated
// statistics. Deliberately not built from the key-only bin equality.
impl<K: Ord + Clone> PartialEq for RunningHistogram<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bin_label == other.bin_label
            && self.value_label == other.value_label
            && self.bins.len() == other.bins.len()
            && self
                .iter_sorted()
                .zip(other.iter_sorted())
                .all(|(a, b)| a.same_contents(b))
    }
}

///
/// Ordered frequency histogram: each distinct key owns a [CountBin]. Shares
/// the structure and contracts of [RunningHistogram] with a plain counter as
/// the payload.
///
#[derive(Clone, Debug)]
pub struct CountHistogram<K> {
    bin_label: String,
    value_label: String,
    bins: BTreeMap<K, CountBin<K>>,
}

impl<K: Ord + Clone> CountHistogram<K> {
    pub fn new(bin_label: impl Into<String>, value_label: impl Into<String>) -> Self {
        CountHistogram {
            bin_label: bin_label.into(),
            value_label: value_label.into(),
            bins: BTreeMap::new(),
        }
    }

    pub fn bin_label(&self) -> &str {
        &self.bin_label
    }

    pub fn value_label(&self) -> &str {
        &self.value_label
    }

    pub fn prefill<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in keys {
            self.bins
                .entry(key.clone())
                .or_insert_with(|| CountBin::new(key));
        }
    }

    /// Bumps the counter for `key`, creating the bin on first sight.
    pub fn increment(&mut self, key: K) {
        match self.bins.get_mut(&key) {
            Some(bin) => bin.increment(),
            None => {
                let mut bin = CountBin::new(key.clone());
                bin.increment();
                self.bins.insert(key, bin);
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&CountBin<K>> {
        self.bins.get(key)
    }

    pub fn iter_sorted(&self) -> impl Iterator<Item = &CountBin<K>> {
        self.bins.values()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}

impl<K: Ord + Clone> Default for CountHistogram<K> {
    fn default() -> Self {
        CountHistogram::new(DEFAULT_BIN_LABEL, DEFAULT_VALUE_LABEL)
    }
}

impl<K: Ord + Clone> PartialEq for CountHistogram<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bin_label == other.bin_label
            && self.value_label == other.value_label
            && self.bins.len() == other.bins.len()
            && self
                .iter_sorted()
                .zip(other.iter_sorted())
                .all(|(a, b)| a.same_contents(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn iteration_is_ascending_regardless_of_insertion_order() {
        let mut histogram: RunningHistogram<i32> = RunningHistogram::new("ReadLength", "NM");
        for key in [5, 1, 3] {
            histogram.add_value(key, 1.0);
        }

        let keys: Vec<i32> = histogram.iter_sorted().map(|bin| *bin.id()).collect();
        assert_eq!(keys, vec![1, 3, 5]);
    }

    #[rstest]
    fn prefill_then_add_does_not_duplicate_bins() {
        let mut histogram: RunningHistogram<i32> = RunningHistogram::new("ReadLength", "NM");
        histogram.prefill(vec![10, 20, 30]);
        assert_eq!(histogram.len(), 3);

        histogram.add_value(20, 2.0);
        histogram.add_value(20, 4.0);
        histogram.add_value(40, 1.0);

        // distinct keys ever referenced: 10, 20, 30, 40
        assert_eq!(histogram.len(), 4);
        assert_eq!(histogram.get(&20).unwrap().stat().count(), 2);
        assert_eq!(histogram.get(&10).unwrap().stat().count(), 0);
    }

    #[rstest]
    fn prefill_is_a_noop_for_existing_keys() {
        let mut histogram: RunningHistogram<i32> = RunningHistogram::default();
        histogram.add_value(7, 3.0);
        histogram.prefill(vec![7]);

        assert_eq!(histogram.get(&7).unwrap().stat().count(), 1);
    }

    #[rstest]
    fn bins_compare_by_key_only() {
        let mut a = RunningBin::new(42);
        let b = RunningBin::new(42);
        let c = RunningBin::new(43);

        a.add_value(1.0);
        a.add_value(2.0);

        assert!(a == b);
        assert!(a != c);
        assert!(!a.same_contents(&b));
        assert!(a.same_contents(&a.clone()));

        let mut x = CountBin::new(1);
        let y = CountBin::new(1);
        x.increment();
        assert!(x == y);
        assert!(!x.same_contents(&y));
    }

    #[rstest]
    fn histogram_equality_is_structural() {
        let mut a: RunningHistogram<i32> = RunningHistogram::new("ReadLength", "NM");
        let mut b: RunningHistogram<i32> = RunningHistogram::new("ReadLength", "NM");

        a.add_value(1, 2.0);
        b.add_value(1, 2.0);
        assert_eq!(a, b);

        // same keys, different contents: not equal even though the bins
        // themselves compare equal by key
        b.add_value(1, 3.0);
        assert!(a != b);

        let c: RunningHistogram<i32> = RunningHistogram::new("ReadLength", "other");
        assert!(RunningHistogram::<i32>::new("ReadLength", "other") == c);
        assert!(a != c);
    }

    #[rstest]
    fn count_histogram_accumulates_frequencies() {
        let mut histogram: CountHistogram<i32> = CountHistogram::new("SoftClips", "ReadCounts");
        for key in [3, 1, 3, 2, 1, 1] {
            histogram.increment(key);
        }

        let rows: Vec<(i32, u64)> = histogram
            .iter_sorted()
            .map(|bin| (*bin.id(), bin.count()))
            .collect();
        assert_eq!(rows, vec![(1, 3), (2, 1), (3, 2)]);
    }

    #[rstest]
    fn id_value_projects_numeric_keys() {
        let bin = RunningBin::new(128usize);
        assert_eq!(bin.id_value().unwrap(), 128.0);

        let count_bin = CountBin::new(7u32);
        assert_eq!(count_bin.id_value().unwrap(), 7.0);
    }

    #[rstest]
    fn id_value_fails_for_unrepresentable_keys() {
        use num_traits::ToPrimitive;

        // an Ord key whose numeric projection is undefined
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Opaque(&'static str);

        impl std::fmt::Display for Opaque {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ToPrimitive for Opaque {
            fn to_i64(&self) -> Option<i64> {
                None
            }

            fn to_u64(&self) -> Option<u64> {
                None
            }
        }

        let bin = RunningBin::new(Opaque("chrX"));
        let err = bin.id_value().unwrap_err();
        assert!(matches!(err, HistogramError::NonNumericKey(_)));
        assert_eq!(
            err.to_string(),
            "Bin key chrX is not representable as a 64-bit float"
        );
    }

    #[rstest]
    fn bin_display_is_key_and_count() {
        let mut bin = RunningBin::new(36);
        bin.add_value(1.0);
        bin.add_value(5.0);
        assert_eq!(bin.to_string(), "36:2");

        let mut count_bin = CountBin::new(4);
        count_bin.increment();
        assert_eq!(count_bin.to_string(), "4:1");
    }
}
