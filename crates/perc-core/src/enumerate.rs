//! Lazy enumeration of arrangements in canonical order.
//!
//! Both iterators walk index tuples in lexicographic order over the input
//! positions, so repeated labels are treated as distinct positions. Each call to
//! `next` does `O(n)` work; nothing beyond the current index tuple is stored.

use std::iter::FusedIterator;

use crate::mode::SelectionMode;

/// Ordered `r`-length selections of distinct positions.
#[derive(Debug, Clone)]
pub struct Permutations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    used: Vec<bool>,
    state: Cursor,
}

/// Strictly increasing `r`-length position subsets.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    pool: &'a [T],
    indices: Vec<usize>,
    state: Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Start,
    Running,
    Done,
}

impl<'a, T> Permutations<'a, T> {
    pub fn new(pool: &'a [T], r: usize) -> Self {
        let state = if r > pool.len() {
            Cursor::Done
        } else {
            Cursor::Start
        };
        Self {
            pool,
            indices: (0..r.min(pool.len())).collect(),
            used: vec![false; pool.len()],
            state,
        }
    }

    /// Step `indices` to the next tuple. Returns false once exhausted.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let r = self.indices.len();
        for pos in (0..r).rev() {
            let current = self.indices[pos];
            self.used[current] = false;
            if let Some(next) = (current + 1..n).find(|&c| !self.used[c]) {
                self.indices[pos] = next;
                self.used[next] = true;
                let mut free = 0;
                for slot in pos + 1..r {
                    while self.used[free] {
                        free += 1;
                    }
                    self.indices[slot] = free;
                    self.used[free] = true;
                }
                return true;
            }
        }
        false
    }
}

impl<'a, T: Clone> Iterator for Permutations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            Cursor::Done => return None,
            Cursor::Start => {
                for &i in &self.indices {
                    self.used[i] = true;
                }
                self.state = Cursor::Running;
            }
            Cursor::Running => {
                if !self.advance() {
                    self.state = Cursor::Done;
                    return None;
                }
            }
        }
        Some(pick(self.pool, &self.indices))
    }
}

impl<T: Clone> FusedIterator for Permutations<'_, T> {}

impl<'a, T> Combinations<'a, T> {
    pub fn new(pool: &'a [T], r: usize) -> Self {
        let state = if r > pool.len() {
            Cursor::Done
        } else {
            Cursor::Start
        };
        Self {
            pool,
            indices: (0..r.min(pool.len())).collect(),
            state,
        }
    }

    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let r = self.indices.len();
        // Rightmost slot that has not reached its maximum value `pos + n - r`.
        let Some(pos) = (0..r).rev().find(|&pos| self.indices[pos] != pos + n - r) else {
            return false;
        };
        self.indices[pos] += 1;
        for slot in pos + 1..r {
            self.indices[slot] = self.indices[slot - 1] + 1;
        }
        true
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            Cursor::Done => return None,
            Cursor::Start => self.state = Cursor::Running,
            Cursor::Running => {
                if !self.advance() {
                    self.state = Cursor::Done;
                    return None;
                }
            }
        }
        Some(pick(self.pool, &self.indices))
    }
}

impl<T: Clone> FusedIterator for Combinations<'_, T> {}

fn pick<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| pool[i].clone()).collect()
}

/// Lazy arrangements of `items` for a possibly negative selection size.
///
/// Negative `r` yields nothing.
pub fn arrangements<'a, T: Clone + 'a>(
    items: &'a [T],
    r: i64,
    mode: SelectionMode,
) -> Box<dyn Iterator<Item = Vec<T>> + 'a> {
    let Ok(r) = usize::try_from(r) else {
        return Box::new(std::iter::empty());
    };
    match mode {
        SelectionMode::Ordered => Box::new(Permutations::new(items, r)),
        SelectionMode::Unordered => Box::new(Combinations::new(items, r)),
    }
}
