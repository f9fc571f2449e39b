use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// One ranked result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
}

/// Structure to store ranking results
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score.
    /// The sort is stable, so equal scores keep their input order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|e| !e.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Drop every entry whose score is not strictly positive
    pub fn retain_positive(&mut self) -> &mut Self {
        self.list.retain(|e| e.score > 0.0);
        self
    }

    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.list.truncate(len);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry<K>> {
        self.list.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|e| &e.key)
    }

    /// Replace every key, keeping scores and order
    pub fn map_keys<T, F>(self, mut f: F) -> Hits<T>
    where
        F: FnMut(K) -> T,
    {
        Hits::new(
            self.list
                .into_iter()
                .map(|e| HitEntry { key: f(e.key), score: e.score })
                .collect(),
        )
    }
}

impl<K> Default for Hits<K> {
    fn default() -> Self {
        Hits { list: Vec::new() }
    }
}

impl<K> IntoIterator for Hits<K> {
    type Item = HitEntry<K>;
    type IntoIter = std::vec::IntoIter<HitEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // each hit on its own line
            writeln!(f, "Hits [")?;
            for e in &self.list {
                writeln!(f, "    {:?}: {:.6}", e.key, e.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|e| (&e.key, e.score)))
                .finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.list {
            writeln!(f, "{:.6}\t{}", e.score, e.key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(scores: &[f64]) -> Hits<usize> {
        Hits::new(
            scores
                .iter()
                .enumerate()
                .map(|(key, &score)| HitEntry { key, score })
                .collect(),
        )
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut h = hits(&[0.2, 0.5, 0.2, f64::NAN, 0.5, 0.1]);
        h.sort_by_score_desc();
        assert_eq!(h.keys().copied().collect::<Vec<_>>(), vec![1, 4, 0, 2, 5]);
    }

    #[test]
    fn retain_positive_drops_zero_and_negative() {
        let mut h = hits(&[0.0, 0.3, -0.1, 1e-9]);
        h.retain_positive();
        assert_eq!(h.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn truncate_and_map_keys() {
        let mut h = hits(&[0.9, 0.8, 0.7]);
        h.truncate(2);
        let named = h.map_keys(|k| format!("doc{k}"));
        assert_eq!(named.keys().cloned().collect::<Vec<_>>(), vec!["doc0", "doc1"]);
        assert_eq!(named.to_string(), "0.900000\tdoc0\n0.800000\tdoc1\n");
    }

    #[test]
    fn alternate_debug_prints_one_hit_per_line() {
        let h = hits(&[0.5]);
        assert_eq!(format!("{:#?}", h), "Hits [\n    0: 0.500000\n]");
        assert_eq!(format!("{:?}", h), "[(0, 0.5)]");
    }
}
