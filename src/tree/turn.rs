use serde::Serialize;

/// Owner of an information set.
///
/// Terminal nodes carry no infoset at all, so only the two kinds of
/// decision-makers appear here.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Turn {
    /// Nature, moving with fixed odds.
    Chance,
    /// A strategic player, by 0-based index.
    Choice(usize),
}

impl Turn {
    pub fn is_chance(&self) -> bool {
        matches!(self, Self::Chance)
    }
    /// The strategic player index, if any.
    pub fn player(&self) -> Option<usize> {
        match self {
            Self::Chance => None,
            Self::Choice(player) => Some(*player),
        }
    }
}

impl From<usize> for Turn {
    fn from(player: usize) -> Self {
        Self::Choice(player)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chance => write!(f, "chance"),
            Self::Choice(player) => write!(f, "P{}", player + 1),
        }
    }
}
