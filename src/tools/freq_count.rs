use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Inputs with more symbols than this are counted in parallel.
const PAR_THRESHOLD: usize = 64_000;
/// 16k is pretty much the sweet spot for chunk size.
const PAR_CHUNK: usize = 16_000;

/// Symbol counts, kept in the order each symbol was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, u64)>,
    index: FxHashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `sym`.
    pub fn add(&mut self, sym: char) {
        self.add_count(sym, 1);
    }

    fn add_count(&mut self, sym: char, count: u64) {
        match self.index.get(&sym) {
            Some(&idx) => self.entries[idx].1 += count,
            None => {
                self.index.insert(sym, self.entries.len());
                self.entries.push((sym, count));
            }
        }
    }

    /// Fold the counts of `other` into this table. Symbols new to this table are
    /// appended in the order `other` first saw them.
    pub fn merge(mut self, other: FrequencyTable) -> Self {
        for (sym, count) in other.entries {
            self.add_count(sym, count);
        }
        self
    }

    pub fn get(&self, sym: char) -> Option<u64> {
        self.index.get(&sym).map(|&idx| self.entries[idx].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts. Equals the length of the counted input.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// (symbol, count) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        iter.into_iter().for_each(|sym| table.add(sym));
        table
    }
}

/// Returns a frequency count of the input text. Uses parallelism when the text is over 64k symbols.
///
/// Chunks are merged left to right, so the key order matches a sequential scan.
pub fn freqs(text: &str) -> FrequencyTable {
    let symbols = text.chars().count();
    if symbols > PAR_THRESHOLD {
        let data = text.chars().collect::<Vec<char>>();
        data.par_chunks(PAR_CHUNK)
            .fold(FrequencyTable::new, |mut table, chunk| {
                chunk.iter().for_each(|&sym| table.add(sym));
                table
            })
            .reduce(FrequencyTable::new, FrequencyTable::merge)
    } else {
        text.chars().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("aaaa", &[('a', 4)]; "singleton")]
    #[test_case("aabb", &[('a', 2), ('b', 2)]; "two symbols")]
    #[test_case("abracadabra", &[('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]; "abracadabra")]
    #[test_case("", &[]; "empty")]
    fn freqs_test(text: &str, expected: &[(char, u64)]) {
        let table = freqs(text);
        assert_eq!(table.iter().collect::<Vec<_>>(), expected);
        assert_eq!(table.total(), text.chars().count() as u64);
    }

    #[test]
    fn multibyte_symbols_test() {
        let table = freqs("héé✓");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get('é'), Some(2));
        assert_eq!(table.get('✓'), Some(1));
        assert_eq!(table.get('x'), None);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn parallel_matches_sequential_test() {
        // Long enough to take the parallel path, with late first sightings.
        let mut text = "the quick brown fox jumps over the lazy dog".repeat(3_000);
        text.push_str("ZYX");
        let par = freqs(&text);
        let seq = text.chars().collect::<FrequencyTable>();
        assert_eq!(par.iter().collect::<Vec<_>>(), seq.iter().collect::<Vec<_>>());
        assert_eq!(par.total(), text.chars().count() as u64);
        assert_eq!(par.get('Z'), Some(1));
    }

    #[test]
    fn merge_keeps_first_seen_order_test() {
        let left = "ab".chars().collect::<FrequencyTable>();
        let right = "cba".chars().collect::<FrequencyTable>();
        let merged = left.merge(right);
        assert_eq!(
            merged.iter().collect::<Vec<_>>(),
            vec![('a', 2), ('b', 2), ('c', 1)]
        );
    }
}
