use crate::*;

/// Weight stored at every node of the game arena.
///
/// A vertex without an infoset is terminal. Relationships are plain
/// indices into the owning [`Game`], never owning handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertex {
    pub(crate) infoset: Option<InfosetIndex>,
    pub(crate) outcome: Option<OutcomeIndex>,
}

impl Vertex {
    pub fn infoset(&self) -> Option<InfosetIndex> {
        self.infoset
    }
    pub fn outcome(&self) -> Option<OutcomeIndex> {
        self.outcome
    }
    pub fn is_terminal(&self) -> bool {
        self.infoset.is_none()
    }
}
