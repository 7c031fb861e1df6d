use std::collections::HashSet;
use std::hash::Hash;

/// Set of selected row ids.
///
/// Selection lives independently of search, filters, sort and page: an id
/// stays selected while its row is out of view until the selection is
/// explicitly cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTracker<K: Eq + Hash> {
    ids: HashSet<K>,
}

impl<K: Eq + Hash> Default for SelectionTracker<K> {
    fn default() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> SelectionTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it if present
    pub fn toggle(&mut self, id: K) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Sets the membership of one id explicitly (checkbox change)
    pub fn set(&mut self, id: K, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Replaces the selection with exactly the given ids
    pub fn select_all<I: IntoIterator<Item = K>>(&mut self, ids: I) {
        self.ids = ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &K) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &HashSet<K> {
        &self.ids
    }

    /// True when the list is non-empty and every id in it is selected
    pub fn contains_all<'a, I>(&self, ids: I) -> bool
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut any = false;
        for id in ids {
            if !self.ids.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut s = SelectionTracker::new();
        s.toggle("a".to_string());
        assert!(s.is_selected(&"a".to_string()));
        s.toggle("a".to_string());
        assert!(s.is_empty());
    }

    #[test]
    fn test_select_all_replaces() {
        let mut s = SelectionTracker::new();
        s.toggle(1);
        s.select_all(vec![2, 3]);
        assert!(!s.is_selected(&1));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_set_and_clear() {
        let mut s = SelectionTracker::new();
        s.set(5, true);
        s.set(5, true);
        assert_eq!(s.len(), 1);
        s.set(5, false);
        assert!(!s.is_selected(&5));
        s.select_all(vec![1, 2]);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn test_contains_all() {
        let mut s = SelectionTracker::new();
        s.select_all(vec![1, 2, 3]);
        assert!(s.contains_all(&[1, 2]));
        assert!(!s.contains_all(&[1, 4]));
        assert!(!s.contains_all(&[]));
    }
}
