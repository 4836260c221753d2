//! Wall instancer
//!
//! Lays the perimeter of a `w x h` room out as one block per cell along each
//! side, in the fixed order north, west, south, east. Positions are pure
//! functions of the room size; the dungeon applies them to pooled blocks.

use crate::room::{DUNGEON_BLOCK_SIZE, MAX_ROOM_SIZE};

/// Pooled wall blocks, enough for the perimeter of the largest room
pub const WALL_POOL_CAPACITY: usize = (MAX_ROOM_SIZE as usize + MAX_ROOM_SIZE as usize) * 2;

const _: () = assert!(
    WALL_POOL_CAPACITY >= 2 * (MAX_ROOM_SIZE as usize + MAX_ROOM_SIZE as usize),
    "wall pool cannot hold the perimeter of the largest room"
);

/// Room side, in layout order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// `z = 0`, runs along x
    North,
    /// `x = (w - 1) * BLOCK`, runs along z
    West,
    /// `z = (h - 1) * BLOCK`, runs along x
    South,
    /// `x = 0`, runs along z
    East,
}

impl WallSide {
    /// All sides in layout order
    pub const ALL: [Self; 4] = [Self::North, Self::West, Self::South, Self::East];

    /// Blocks on this side of a `width x height` room
    pub const fn block_count(self, width: u32, height: u32) -> u32 {
        match self {
            Self::North | Self::South => width,
            Self::West | Self::East => height,
        }
    }
}

/// Horizontal position `(x, z)` of block `index` on `side`
pub fn wall_block_position(side: WallSide, index: u32, width: u32, height: u32) -> (f32, f32) {
    let along = index as f32 * DUNGEON_BLOCK_SIZE;
    let far_x = width.saturating_sub(1) as f32 * DUNGEON_BLOCK_SIZE;
    let far_z = height.saturating_sub(1) as f32 * DUNGEON_BLOCK_SIZE;

    match side {
        WallSide::North => (along, 0.0),
        WallSide::West => (far_x, along),
        WallSide::South => (along, far_z),
        WallSide::East => (0.0, along),
    }
}

/// Iterator over every perimeter block position, exactly `2 * (w + h)` of them
#[derive(Debug, Clone)]
pub struct WallLayout {
    width: u32,
    height: u32,
    side: usize,
    index: u32,
    remaining: usize,
}

impl WallLayout {
    /// Layout for a `width x height` room
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            side: 0,
            index: 0,
            remaining: 2 * (width as usize + height as usize),
        }
    }
}

impl Iterator for WallLayout {
    type Item = (f32, f32);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&side) = WallSide::ALL.get(self.side) {
            if self.index < side.block_count(self.width, self.height) {
                let position = wall_block_position(side, self.index, self.width, self.height);
                self.index += 1;
                self.remaining -= 1;
                return Some(position);
            }
            self.side += 1;
            self.index = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WallLayout {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::MIN_ROOM_SIZE;
    use approx::assert_relative_eq;

    #[test]
    fn test_layout_consumes_exact_perimeter() {
        for w in MIN_ROOM_SIZE..=MAX_ROOM_SIZE {
            for h in MIN_ROOM_SIZE..=MAX_ROOM_SIZE {
                let layout = WallLayout::new(w, h);
                let expected = 2 * (w + h) as usize;
                assert_eq!(layout.len(), expected);
                assert_eq!(layout.count(), expected);
                assert!(expected <= WALL_POOL_CAPACITY);
            }
        }
    }

    #[test]
    fn test_positions_stay_inside_room_extent() {
        for w in MIN_ROOM_SIZE..=MAX_ROOM_SIZE {
            for h in MIN_ROOM_SIZE..=MAX_ROOM_SIZE {
                let limit = (w.max(h) - 1) as f32 * DUNGEON_BLOCK_SIZE;
                for (x, z) in WallLayout::new(w, h) {
                    assert!((0.0..=limit).contains(&x), "x={x} for {w}x{h}");
                    assert!((0.0..=limit).contains(&z), "z={z} for {w}x{h}");
                }
            }
        }
    }

    #[test]
    fn test_largest_room_fills_pool_exactly() {
        assert_eq!(WallLayout::new(MAX_ROOM_SIZE, MAX_ROOM_SIZE).len(), WALL_POOL_CAPACITY);
    }

    #[test]
    fn test_side_order_and_positions() {
        let (w, h) = (10, 12);
        let positions: Vec<_> = WallLayout::new(w, h).collect();

        // north
        assert_relative_eq!(positions[0].0, 0.0);
        assert_relative_eq!(positions[9].0, 36.0);
        assert_relative_eq!(positions[9].1, 0.0);

        // west starts after the north run
        for j in 0..h as usize {
            let (x, z) = positions[w as usize + j];
            assert_relative_eq!(x, 36.0);
            assert_relative_eq!(z, j as f32 * 4.0);
        }

        // south
        let (x, z) = positions[(w + h) as usize + 3];
        assert_relative_eq!(x, 12.0);
        assert_relative_eq!(z, 44.0);

        // east closes the loop
        let (x, z) = positions[positions.len() - 1];
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(z, 44.0);
    }

    #[test]
    fn test_block_position_matches_layout() {
        let (x, z) = wall_block_position(WallSide::West, 5, 10, 12);
        assert_relative_eq!(x, 36.0);
        assert_relative_eq!(z, 20.0);
    }
}
