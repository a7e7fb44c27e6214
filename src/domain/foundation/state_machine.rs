//! State machine trait for lifecycle enums.
//!
//! Gives lifecycle statuses (such as a section's fetch status) one shared
//! way of checking transitions.

/// Trait for status enums that represent state machines.
///
/// Implementors list their legal targets; the transition check comes for
/// free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }
}
