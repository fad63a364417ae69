//! First-class invariants for dots and boxes.
//!
//! Invariants are logical properties that must hold after every committed
//! move. The game checks them as move postconditions in debug builds, and
//! each one can be tested on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod boundary_unowned;
pub mod history_consistent;
pub mod score_consistent;
pub mod terminal_when_full;

pub use boundary_unowned::BoundaryUnownedInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use score_consistent::ScoreConsistentInvariant;
pub use terminal_when_full::TerminalWhenFullInvariant;

/// All dots-and-boxes invariants as a composable set.
pub type DotsInvariants = (
    BoundaryUnownedInvariant,
    ScoreConsistentInvariant,
    TerminalWhenFullInvariant,
    HistoryConsistentInvariant,
);
