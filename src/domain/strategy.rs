//! Step strategy enum for selecting how the mark phase is computed.
//!
//! Both strategies read the same pre-step board and write marks only after
//! every cell has been evaluated, so they always agree on the result.

/// How a step evaluates its mark phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Mark phase spread over the rayon thread pool
    Parallel,
}

impl StepStrategy {
    /// Get all available strategies
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    /// Short name, also accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "serial",
            StepStrategy::Parallel => "parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Mark and resolve on one thread",
            StepStrategy::Parallel => "Mark rows in parallel, resolve serially",
        }
    }
}

impl std::str::FromStr for StepStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StepStrategy::all()
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown strategy '{value}', expected serial or parallel"))
    }
}
