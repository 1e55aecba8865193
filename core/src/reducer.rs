//! State transitions.

use crate::effect::Effect;
use smallvec::SmallVec;

/// Pure transition function of one role slice.
///
/// `reduce` mutates the slice in place and returns what the runtime should
/// do next. It must not perform I/O: a remote call is returned as an
/// [`Effect::Future`] and its outcome arrives later as another action.
pub trait Reducer {
    /// Slice this reducer owns
    type State;

    /// Inputs: requests, outcomes and plain UI actions
    type Action;

    /// Injected collaborators (gateway, clock)
    type Environment;

    /// Apply `action` to `state`.
    ///
    /// Nearly every arm returns a single effect, so four fit inline.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
