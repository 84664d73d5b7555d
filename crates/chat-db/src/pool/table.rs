//! Insertion-ordered table keyed by UUID

use std::collections::HashMap;

use uuid::Uuid;

#[derive(Debug)]
struct Row<T> {
    seq: u64,
    value: T,
}

/// One table of the in-memory store
///
/// Iteration follows insertion order so listings are stable.
#[derive(Debug)]
pub struct Table<T> {
    rows: HashMap<Uuid, Row<T>>,
    next_seq: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> Table<T> {
    pub fn get(&self, id: &Uuid) -> Option<&T> {
        self.rows.get(id).map(|row| &row.value)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut T> {
        self.rows.get_mut(id).map(|row| &mut row.value)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.rows.contains_key(id)
    }

    /// Insert a new row; returns false and leaves the table unchanged if
    /// the id is taken
    pub fn insert(&mut self, id: Uuid, value: T) -> bool {
        if self.rows.contains_key(&id) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(id, Row { seq, value });
        true
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<T> {
        self.rows.remove(id).map(|row| row.value)
    }

    /// First row matching `pred`, in no particular order
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.rows.values().map(|row| &row.value).find(|v| pred(v))
    }

    /// Whether any row matches `pred`
    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.rows.values().any(|row| pred(&row.value))
    }

    /// Rows in insertion order
    pub fn ordered(&self) -> Vec<&T> {
        let mut rows: Vec<&Row<T>> = self.rows.values().collect();
        rows.sort_unstable_by_key(|row| row.seq);
        rows.into_iter().map(|row| &row.value).collect()
    }

    /// Rows matching `pred`, in insertion order
    ///
    /// Only the matching rows are sorted.
    pub fn filtered(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<&T> {
        let mut rows: Vec<&Row<T>> = self.rows.values().filter(|row| pred(&row.value)).collect();
        rows.sort_unstable_by_key(|row| row.seq);
        rows.into_iter().map(|row| &row.value).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
