/// Tag attached to each iterate a solver reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// First profile examined.
    Start,
    /// A profile accepted as an equilibrium.
    Candidate,
    /// Last profile examined.
    End,
}

/// Callback receiving solver iterates.
pub type Observer = Box<dyn FnMut(Progress, &crate::Profile)>;

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Candidate => write!(f, "candidate"),
            Self::End => write!(f, "end"),
        }
    }
}
