use crate::*;
use std::collections::HashMap;

/// Infoset identities shared by the original game and its working copy.
///
/// Built once, when the working copy is labeled, and threaded through the
/// whole decomposition. Truncated copies carry labels only; this map turns
/// a label back into an infoset of either game.
#[derive(Debug, Clone, Default)]
pub struct Correspondence(HashMap<Label, (InfosetIndex, InfosetIndex)>);

impl Correspondence {
    /// Labels every infoset of `working`, a clone of `original`, and
    /// records which infoset of each game a label stands for.
    pub fn label(original: &Game, working: &mut Game) -> Self {
        Self(
            working
                .relabel()
                .into_iter()
                .inspect(|(index, _)| {
                    debug_assert!(original.infoset(*index).turn() == working.infoset(*index).turn());
                })
                .map(|(index, label)| (label, (index, index)))
                .collect(),
        )
    }
    /// Infoset of the caller's game.
    pub fn original(&self, label: Label) -> anyhow::Result<InfosetIndex> {
        self.0
            .get(&label)
            .map(|(original, _)| *original)
            .ok_or_else(|| anyhow::anyhow!("no original infoset for label {}", label))
    }
    /// Infoset of the working copy.
    pub fn working(&self, label: Label) -> anyhow::Result<InfosetIndex> {
        self.0
            .get(&label)
            .map(|(_, working)| *working)
            .ok_or_else(|| anyhow::anyhow!("no working infoset for label {}", label))
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &(InfosetIndex, InfosetIndex))> {
        self.0.iter()
    }
}
