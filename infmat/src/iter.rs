//! Row-major iteration over stored cells
//!
//! Iteration reads storage as it is: it never compacts, so cells created by
//! the write proxy show up even while they still hold the default value.
//! Call [`Matrix::compact`](crate::Matrix::compact) first to see only
//! significant cells.

use hashbrown::HashSet;
use infmat_core::Position;
use std::collections::btree_map;

/// Iterator over `(Position, &T)` in row-major order
pub struct Iter<'a, T> {
    inner: btree_map::Iter<'a, Position, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(inner: btree_map::Iter<'a, Position, T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Position, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&pos, value)| (pos, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&pos, value)| (pos, value))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over `(Position, &mut T)` in row-major order
///
/// Every yielded cell is marked pending, since the caller may store the
/// default through the reference.
pub struct IterMut<'a, T> {
    inner: btree_map::IterMut<'a, Position, T>,
    pending: &'a mut HashSet<Position>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(
        inner: btree_map::IterMut<'a, Position, T>,
        pending: &'a mut HashSet<Position>,
    ) -> Self {
        Self { inner, pending }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (Position, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        let (&pos, value) = self.inner.next()?;
        self.pending.insert(pos);
        Some((pos, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (&pos, value) = self.inner.next_back()?;
        self.pending.insert(pos);
        Some((pos, value))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::Matrix;
    use infmat_core::Position;

    #[test]
    fn test_row_major_order() {
        let mut m = Matrix::<i64>::new();
        for row in (0..10).rev() {
            for col in (0..10).rev() {
                m.insert(row, col, 1 + row * 10 + col);
            }
        }

        let positions: Vec<Position> = m.iter().map(|(pos, _)| pos).collect();
        assert_eq!(positions.len(), 100);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[99], Position::new(9, 9));

        for (pos, &value) in &m {
            assert_eq!(value, 1 + pos.row * 10 + pos.col);
        }
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut m = Matrix::<i64>::new();
        m.insert(1, 1, 1);
        m.insert(0, 5, 2);

        let iter = m.iter();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(m.iter().len(), 2);
        assert_eq!(m.iter().next_back(), Some((Position::new(1, 1), &1)));
    }

    #[test]
    fn test_iter_sees_speculative_cells() {
        let mut m = Matrix::<i64>::new();
        m.insert(0, 0, 7);
        let _ = m.slot(3, 4);

        let seen: Vec<_> = m.iter().collect();
        assert_eq!(seen, vec![(Position::new(0, 0), &7), (Position::new(3, 4), &0)]);

        m.compact();
        let seen: Vec<_> = m.iter().collect();
        assert_eq!(seen, vec![(Position::new(0, 0), &7)]);
    }

    #[test]
    fn test_iter_mut_resolves_defaults() {
        let mut m = Matrix::<i64>::new();
        for col in 0..5 {
            m.insert(0, col, col + 1);
        }

        for (pos, value) in m.iter_mut() {
            if pos.col >= 3 {
                *value = 0;
            } else {
                *value *= 10;
            }
        }

        assert_eq!(m.size(), 3);
        assert_eq!(m.cols(), 3);
        assert_eq!(*m.at(0, 2), 30);
    }
}
