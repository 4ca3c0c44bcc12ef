//! Lifecycle of a single generation call

/// Phase of one generation call.
///
/// `Idle -> Composing -> Dispatching -> {Succeeded, Failed}`. Invalid input
/// moves straight from `Composing` to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationPhase {
    Idle,
    Composing,
    Dispatching,
    Succeeded,
    Failed,
}

impl GenerationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPhase::Idle => "idle",
            GenerationPhase::Composing => "composing",
            GenerationPhase::Dispatching => "dispatching",
            GenerationPhase::Succeeded => "succeeded",
            GenerationPhase::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GenerationPhase::Succeeded | GenerationPhase::Failed)
    }

    /// Whether `next` is a legal successor of this phase
    pub fn can_transition_to(&self, next: GenerationPhase) -> bool {
        matches!(
            (self, next),
            (GenerationPhase::Idle, GenerationPhase::Composing)
                | (GenerationPhase::Composing, GenerationPhase::Dispatching)
                | (GenerationPhase::Composing, GenerationPhase::Failed)
                | (GenerationPhase::Dispatching, GenerationPhase::Succeeded)
                | (GenerationPhase::Dispatching, GenerationPhase::Failed)
        )
    }
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
