/// Single coordinate axis, used for rows, columns, width and height.
///
/// Signed so that queries just outside the board (e.g. the neighbours of a corner) are representable.
pub type Coord = i32;

/// Count type used for mine counts, flag counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    /// Only meaningful for in-bounds coordinates.
    fn to_nd_index(self) -> Self::Output {
        [self.0 as usize, self.1 as usize]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [Coord2; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Size of a board as `(height, width)`, i.e. the exclusive upper bound of `(row, column)`.
pub type Bounds = Coord2;

pub const fn in_bounds((row, column): Coord2, (height, width): Bounds) -> bool {
    row >= 0 && row < height && column >= 0 && column < width
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: Coord2, bounds: Bounds) -> Option<Coord2> {
    let next = (
        coords.0.checked_add(delta.0)?,
        coords.1.checked_add(delta.1)?,
    );
    in_bounds(next, bounds).then_some(next)
}

/// Iterates over the (up to eight) in-bounds neighbours of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Bounds,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Bounds) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn edge_of_single_row_board() {
        let neighbors: Vec<_> = NeighborIter::new((0, 2), (1, 4)).collect();
        assert_eq!(neighbors, vec![(0, 1), (0, 3)]);
    }

    #[test]
    fn bounds_reject_negative_coordinates() {
        assert!(!in_bounds((-1, 0), (2, 2)));
        assert!(!in_bounds((0, -1), (2, 2)));
        assert!(!in_bounds((2, 0), (2, 2)));
        assert!(in_bounds((1, 1), (2, 2)));
    }
}
