use std::fmt;

/// Named batch actions exposed to a user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchAction {
    /// Primary curve, then the depth-1 preview, in one unit of work.
    RunSequentialPair,
    /// Primary curve and every preview at once.
    RunParallelSet,
    Clear,
}

impl BatchAction {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RunSequentialPair => "Sync",
            Self::RunParallelSet => "Async",
            Self::Clear => "Clear",
        }
    }
}

impl fmt::Display for BatchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
