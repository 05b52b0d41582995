//! Directions: the neighbour set examined by a flood fill.

use bitflags::bitflags;

bitflags! {
    /// Neighbour directions, combinable with bitwise OR.
    ///
    /// # Example
    /// ```
    /// use barren::Directions;
    /// let horizontal = Directions::NEG_X | Directions::POS_X;
    /// assert!(Directions::ORTHOGONAL.contains(horizontal));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// One column to the left.
        const NEG_X = 0b0001;
        /// One column to the right.
        const POS_X = 0b0010;
        /// One row up.
        const POS_Y = 0b0100;
        /// One row down.
        const NEG_Y = 0b1000;
        /// 4-connectivity: every horizontal and vertical neighbour.
        const ORTHOGONAL = Self::NEG_X.bits()
            | Self::POS_X.bits()
            | Self::POS_Y.bits()
            | Self::NEG_Y.bits();
    }
}

impl Default for Directions {
    fn default() -> Self {
        Self::ORTHOGONAL
    }
}

impl std::fmt::Debug for Directions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl Directions {
    /// Fill order: -x, +x, +y, -y.
    const ORDER: [Self; 4] = [Self::NEG_X, Self::POS_X, Self::POS_Y, Self::NEG_Y];

    /// Index of the neighbour of `index` in direction `dir`, on a
    /// `width` x `height` x-major grid. `None` at the edges.
    #[inline]
    pub(crate) fn step(dir: Self, index: usize, width: usize, height: usize) -> Option<usize> {
        let (x, y) = (index / height, index % height);
        if dir == Self::NEG_X {
            (x > 0).then(|| index - height)
        } else if dir == Self::POS_X {
            (x + 1 < width).then(|| index + height)
        } else if dir == Self::POS_Y {
            (y + 1 < height).then(|| index + 1)
        } else if dir == Self::NEG_Y {
            (y > 0).then(|| index - 1)
        } else {
            None
        }
    }

    /// Neighbour indices of `index`, in fill order, restricted to this set.
    #[inline]
    pub(crate) fn neighbours(
        self,
        index: usize,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = usize> {
        Self::ORDER
            .into_iter()
            .filter(move |dir| self.contains(*dir))
            .filter_map(move |dir| Self::step(dir, index, width, height))
    }
}
