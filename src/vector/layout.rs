use super::*;
use std::ops::Range;

/// Offset tables for a [`Shape`].
///
/// Built once per distinct shape and shared by every vector of that shape,
/// so addressing a slot is two table lookups and an add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    players: Vec<usize>,
    infosets: Vec<Vec<usize>>,
    size: usize,
}

impl Layout {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
    /// Total number of slots.
    pub fn size(&self) -> usize {
        self.size
    }
    /// Flat offset of (player, infoset, action), if within the shape.
    pub fn offset(&self, player: usize, infoset: usize, action: usize) -> Option<usize> {
        let start = *self.infosets.get(player)?.get(infoset)?;
        (action < self.shape.actions(player, infoset)).then(|| start + action)
    }
    /// Flat range of one player's slots.
    pub fn player(&self, player: usize) -> Option<Range<usize>> {
        let start = *self.players.get(player)?;
        let end = self.players.get(player + 1).copied().unwrap_or(self.size);
        Some(start..end)
    }
    /// Flat range of one infoset's slots.
    pub fn infoset(&self, player: usize, infoset: usize) -> Option<Range<usize>> {
        let start = *self.infosets.get(player)?.get(infoset)?;
        Some(start..start + self.shape.actions(player, infoset))
    }
}

impl From<Shape> for Layout {
    fn from(shape: Shape) -> Self {
        let mut size = 0;
        let mut players = Vec::with_capacity(shape.players());
        let mut infosets = Vec::with_capacity(shape.players());
        for widths in shape.widths() {
            players.push(size);
            let mut offsets = Vec::with_capacity(widths.len());
            for width in widths {
                offsets.push(size);
                size += width;
            }
            infosets.push(offsets);
        }
        Self {
            shape,
            players,
            infosets,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::from(Shape::from(vec![vec![2, 3], vec![], vec![1]]))
    }

    #[test]
    fn size_is_sum_of_actions() {
        assert_eq!(layout().size(), 6);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = layout();
        assert_eq!(layout.offset(0, 0, 0), Some(0));
        assert_eq!(layout.offset(0, 0, 1), Some(1));
        assert_eq!(layout.offset(0, 1, 2), Some(4));
        assert_eq!(layout.offset(2, 0, 0), Some(5));
        assert_eq!(layout.player(1), Some(5..5));
        assert_eq!(layout.player(2), Some(5..6));
        assert_eq!(layout.infoset(0, 1), Some(2..5));
    }

    #[test]
    fn offsets_outside_shape() {
        let layout = layout();
        assert_eq!(layout.offset(0, 0, 2), None);
        assert_eq!(layout.offset(0, 2, 0), None);
        assert_eq!(layout.offset(1, 0, 0), None);
        assert_eq!(layout.offset(3, 0, 0), None);
        assert_eq!(layout.player(3), None);
    }
}
