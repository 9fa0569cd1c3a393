//! Band construction shared by CSR and CSC
//!
//! A compressed layout groups entries into bands along a major axis (rows
//! for CSR, columns for CSC) and orders each band by its minor index.
//! Building one takes three steps: count entries per band and prefix-sum
//! the counts into offsets, scatter every entry into its band's slots, then
//! order each band. The last step has two strategies, see [`SortStrategy`].

use alloc::vec;
use alloc::vec::Vec;

use crate::MatrixElement;

/// Auto picks counting while `minor_len <= nnz * COUNTING_MINOR_FACTOR`
pub const COUNTING_MINOR_FACTOR: usize = 8;

/// Largest minor extent an explicit `Counting` request allocates scratch
/// for when the entry count does not already justify it
pub const COUNTING_SCRATCH_LIMIT: usize = 1 << 24;

/// How bands get ordered by minor index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Counting when the minor dimension is small relative to the entry
    /// count, comparison otherwise
    #[default]
    Auto,
    /// Bucket by minor index first, then stable scatter by major index.
    /// O(nnz + major + minor) time, O(nnz + minor) scratch space. Falls
    /// back to comparison when the minor extent is past
    /// [`COUNTING_SCRATCH_LIMIT`] and far larger than the entry count
    Counting,
    /// Scatter by major index, then sort each band. O(nnz log band) time
    Comparison,
}

impl SortStrategy {
    /// Resolve to the ordering actually run for a concrete problem size
    pub fn resolve(self, minor_len: usize, nnz: usize) -> SortStrategy {
        let dense_enough = minor_len <= nnz.saturating_mul(COUNTING_MINOR_FACTOR);
        match self {
            SortStrategy::Auto if dense_enough => SortStrategy::Counting,
            SortStrategy::Auto => SortStrategy::Comparison,
            SortStrategy::Counting if dense_enough || minor_len <= COUNTING_SCRATCH_LIMIT => {
                SortStrategy::Counting
            }
            SortStrategy::Counting => SortStrategy::Comparison,
            SortStrategy::Comparison => SortStrategy::Comparison,
        }
    }
}

/// Entries scattered into bands: `offsets` of length `major_len + 1` and
/// one `(minor, value)` slot per entry
#[derive(Debug, Clone)]
pub struct BandLayout<T> {
    offsets: Vec<usize>,
    slots: Vec<(usize, T)>,
}

impl<T: MatrixElement> BandLayout<T> {
    /// Count and scatter `(major, minor, value)` entries into bands
    ///
    /// Bands keep the input order and are not yet sorted. The iterator is
    /// walked twice, once to count and once to place. Every `major` must be
    /// below `major_len`.
    pub fn scatter<I>(major_len: usize, entries: I) -> Self
    where
        I: Iterator<Item = (usize, usize, T)> + Clone,
    {
        let mut offsets = vec![0usize; major_len + 1];
        for (major, _, _) in entries.clone() {
            offsets[major + 1] += 1;
        }
        for i in 0..major_len {
            offsets[i + 1] += offsets[i];
        }

        let nnz = offsets[major_len];
        let mut next = offsets[..major_len].to_vec();
        let mut slots = vec![(0usize, T::ZERO); nnz];
        for (major, minor, value) in entries {
            slots[next[major]] = (minor, value);
            next[major] += 1;
        }

        Self { offsets, slots }
    }

    /// Scatter entries so that every band comes out ordered by minor index
    ///
    /// A counting pass buckets the entries by minor index; scattering the
    /// buckets by major index is stable, so each band inherits the
    /// ascending minor order.
    pub fn scatter_ordered<I>(major_len: usize, minor_len: usize, entries: I) -> Self
    where
        I: Iterator<Item = (usize, usize, T)> + Clone,
    {
        let mut minor_offsets = vec![0usize; minor_len + 1];
        for (_, minor, _) in entries.clone() {
            minor_offsets[minor + 1] += 1;
        }
        for i in 0..minor_len {
            minor_offsets[i + 1] += minor_offsets[i];
        }

        let nnz = minor_offsets[minor_len];
        let mut by_minor = vec![(0usize, 0usize, T::ZERO); nnz];
        for (major, minor, value) in entries {
            by_minor[minor_offsets[minor]] = (major, minor, value);
            minor_offsets[minor] += 1;
        }

        Self::scatter(major_len, by_minor.into_iter())
    }

    /// Scatter and order bands with the given strategy
    pub fn build<I>(major_len: usize, minor_len: usize, entries: I, strategy: SortStrategy) -> Self
    where
        I: Iterator<Item = (usize, usize, T)> + Clone,
    {
        let nnz = entries.clone().count();
        let requested = strategy;
        let strategy = strategy.resolve(minor_len, nnz);
        if requested == SortStrategy::Counting && strategy != requested {
            log::debug!(
                target: "spdok_perf",
                "minor extent {minor_len} too large for counting {nnz} entries, sorting instead"
            );
        }
        log::debug!(
            target: "spdok_perf",
            "ordering {nnz} entries into {major_len} bands (minor extent {minor_len}) with {strategy:?}"
        );

        match strategy {
            SortStrategy::Counting => Self::scatter_ordered(major_len, minor_len, entries),
            _ => {
                let mut layout = Self::scatter(major_len, entries);
                layout.sort_bands();
                layout
            }
        }
    }

    /// Sort every band by minor index
    pub fn sort_bands(&mut self) {
        for band in self.bands_mut() {
            band.sort_unstable_by_key(|&(minor, _)| minor);
        }
    }

    /// Disjoint mutable bands, one per major index, empty ones included
    pub fn bands_mut(&mut self) -> impl Iterator<Item = &mut [(usize, T)]> + '_ {
        let Self { offsets, slots } = self;
        let mut rest: &mut [(usize, T)] = slots.as_mut_slice();
        offsets.windows(2).map(move |w| {
            let (band, tail) = core::mem::take(&mut rest).split_at_mut(w[1] - w[0]);
            rest = tail;
            band
        })
    }

    /// Merge entries sharing a minor index within a band by summation,
    /// dropping sums that come out zero
    ///
    /// Bands must already be ordered.
    pub fn merge_duplicates(&mut self) {
        let major_len = self.offsets.len() - 1;
        let mut write = 0usize;
        let mut read = 0usize;

        for major in 0..major_len {
            let end = self.offsets[major + 1];
            let band_start = write;

            while read < end {
                let (minor, mut value) = self.slots[read];
                read += 1;
                while read < end && self.slots[read].0 == minor {
                    value = value.add(self.slots[read].1);
                    read += 1;
                }
                if !value.is_zero() {
                    self.slots[write] = (minor, value);
                    write += 1;
                }
            }

            self.offsets[major] = band_start;
        }

        self.offsets[major_len] = write;
        self.slots.truncate(write);
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of scattered entries
    pub fn nnz(&self) -> usize {
        self.slots.len()
    }

    /// Split into `(offsets, minor indices, values)`
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        let (indices, values) = self.slots.into_iter().unzip();
        (self.offsets, indices, values)
    }
}

/// Binary search for `minor` inside band `major`
pub(crate) fn band_lookup<T: MatrixElement>(
    offsets: &[usize],
    indices: &[usize],
    values: &[T],
    major: usize,
    minor: usize,
) -> T {
    let (start, end) = (offsets[major], offsets[major + 1]);
    match indices[start..end].binary_search(&minor) {
        Ok(pos) => values[start + pos],
        Err(_) => T::ZERO,
    }
}

/// Iterator over `(major, minor, value)` of a compressed layout, in band
/// order
#[derive(Debug, Clone)]
pub struct BandEntries<'a, T> {
    offsets: &'a [usize],
    indices: &'a [usize],
    values: &'a [T],
    major: usize,
    pos: usize,
}

impl<'a, T> BandEntries<'a, T> {
    pub(crate) fn new(offsets: &'a [usize], indices: &'a [usize], values: &'a [T]) -> Self {
        Self {
            offsets,
            indices,
            values,
            major: 0,
            pos: 0,
        }
    }
}

impl<T: Copy> Iterator for BandEntries<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.values.len() {
            return None;
        }
        while self.offsets[self.major + 1] <= self.pos {
            self.major += 1;
        }
        let item = (self.major, self.indices[self.pos], self.values[self.pos]);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for BandEntries<'_, T> {}

impl<T: Copy> core::iter::FusedIterator for BandEntries<'_, T> {}
