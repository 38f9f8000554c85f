/// Shape descriptor of a partitioned vector.
///
/// `Shape(widths)` where `widths[player][infoset]` is the number of action
/// slots at that infoset. Two vectors can only be combined when their
/// shapes are identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape(Vec<Vec<usize>>);

impl Shape {
    pub fn players(&self) -> usize {
        self.0.len()
    }
    pub fn infosets(&self, player: usize) -> usize {
        self.0.get(player).map_or(0, Vec::len)
    }
    pub fn actions(&self, player: usize, infoset: usize) -> usize {
        self.0
            .get(player)
            .and_then(|widths| widths.get(infoset))
            .copied()
            .unwrap_or_default()
    }
    /// Total number of slots.
    pub fn size(&self) -> usize {
        self.0.iter().flatten().sum()
    }
    pub fn widths(&self) -> &[Vec<usize>] {
        &self.0
    }
}

impl From<Vec<Vec<usize>>> for Shape {
    fn from(widths: Vec<Vec<usize>>) -> Self {
        Self(widths)
    }
}
