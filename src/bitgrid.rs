//! A runtime-sized bit grid packed into a single unsigned integer.
//!
//! Boards are at most 10×10, so a `u128` covers every legal size. The grid is
//! generic over the backing integer so smaller boards can use a narrower word.
//! Cells are addressed by column `x` and row `y`, row-major.

use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitGridError {
    /// `width * height` exceeds the bit capacity of the backing integer.
    #[error("grid of {cells} cells exceeds capacity of {capacity} bits")]
    SizeTooLarge { cells: usize, capacity: usize },
    /// Column or row outside the grid.
    #[error("index out of bounds: x={x}, y={y}")]
    IndexOutOfBounds { x: usize, y: usize },
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    bits: T,
    width: usize,
    height: usize,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    /// Bits available in `T`.
    pub const CAPACITY: usize = mem::size_of::<T>() * 8;

    /// Empty grid. Fails if `width * height` does not fit in `T`.
    pub fn try_new(width: usize, height: usize) -> Result<Self, BitGridError> {
        let cells = width * height;
        if cells > Self::CAPACITY {
            return Err(BitGridError::SizeTooLarge {
                cells,
                capacity: Self::CAPACITY,
            });
        }
        Ok(Self {
            bits: T::zero(),
            width,
            height,
        })
    }

    /// Grid with every cell set.
    pub fn try_filled(width: usize, height: usize) -> Result<Self, BitGridError> {
        let mut grid = Self::try_new(width, height)?;
        grid.fill();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    fn mask(&self) -> T {
        let cells = self.cells();
        if cells == Self::CAPACITY {
            !T::zero()
        } else {
            (T::one() << cells) - T::one()
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, BitGridError> {
        if x >= self.width || y >= self.height {
            Err(BitGridError::IndexOutOfBounds { x, y })
        } else {
            Ok(y * self.width + x)
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitGridError> {
        let idx = self.index(x, y)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitGridError> {
        let idx = self.index(x, y)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), BitGridError> {
        let idx = self.index(x, y)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    pub fn fill(&mut self) {
        self.bits = self.mask();
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Every cell is set.
    pub fn is_full(&self) -> bool {
        self.bits == self.mask()
    }

    /// `(x, y)` of every set cell, row-major.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width.max(1);
        (0..self.cells())
            .filter(move |&idx| ((self.bits >> idx) & T::one()) != T::zero())
            .map(move |idx| (idx % width, idx / width))
    }

    /// `(x, y)` of every clear cell, row-major.
    pub fn iter_unset(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width.max(1);
        (0..self.cells())
            .filter(move |&idx| ((self.bits >> idx) & T::one()) == T::zero())
            .map(move |idx| (idx % width, idx / width))
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid {}x{}:", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let ch = if ((self.bits >> idx) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
