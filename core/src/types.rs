use core::fmt;

use crate::{GameError, Result};

/// Position on the board, numbered row by row from the top-left corner.
pub type CellIndex = u8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

pub const fn validate_index(index: CellIndex) -> Result<CellIndex> {
    if (index as usize) < CELL_COUNT {
        Ok(index)
    } else {
        Err(GameError::InvalidIndex(index))
    }
}

/// Set of cell indices, stored as one bit per cell.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellSet(u16);

impl CellSet {
    const MASK: u16 = (1 << CELL_COUNT) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    pub const fn from_slice(indices: &[CellIndex]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < indices.len() {
            if (indices[i] as usize) < CELL_COUNT {
                bits |= 1 << indices[i];
            }
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, index: CellIndex) -> bool {
        (index as usize) < CELL_COUNT && self.0 & (1 << index) != 0
    }

    /// Returns `false` when `index` is out of range or already present.
    pub fn insert(&mut self, index: CellIndex) -> bool {
        if validate_index(index).is_err() || self.contains(index) {
            return false;
        }
        self.0 |= 1 << index;
        true
    }

    pub fn remove(&mut self, index: CellIndex) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.0 &= !(1 << index);
        true
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the `n`th member in ascending order.
    pub fn nth(self, n: usize) -> Option<CellIndex> {
        self.iter().nth(n)
    }

    pub fn iter(self) -> CellSetIter {
        CellSetIter {
            bits: self.0,
            next: 0,
        }
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<CellIndex> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellIndex>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<CellIndex> for CellSet {
    fn extend<I: IntoIterator<Item = CellIndex>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl IntoIterator for CellSet {
    type Item = CellIndex;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct CellSetIter {
    bits: u16,
    next: CellIndex,
}

impl Iterator for CellSetIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        while usize::from(self.next) < CELL_COUNT {
            let index = self.next;
            self.next += 1;
            if self.bits & (1 << index) != 0 {
                return Some(index);
            }
        }
        None
    }
}
