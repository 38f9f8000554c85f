use serde::Serialize;

/// Correspondence tag attached to an information set.
///
/// Labels carry no gameplay meaning. They exist so that "the same" infoset
/// can be recognized across structurally distinct copies of a tree: every
/// copy preserves labels verbatim, while infoset indices are renumbered.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Label(usize);

impl Label {
    pub fn inner(&self) -> usize {
        self.0
    }
}

impl From<usize> for Label {
    fn from(n: usize) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
