//! Effects returned by reducers.
//!
//! An effect is a description. Nothing runs until the store executes it.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed future an effect runs; `Some` is fed back to the reducer
pub type EffectFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

/// Work for the runtime, producing actions of type `Action`
pub enum Effect<Action> {
    /// Nothing to do
    None,

    /// Async work, usually one remote call
    Future(EffectFuture<Action>),
}

impl<Action: fmt::Debug> fmt::Debug for Effect<Action> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("Effect::None"),
            Self::Future(_) => f.write_str("Effect::Future(<future>)"),
        }
    }
}

impl<Action> Effect<Action> {
    /// Effect for a future that always ends in an action
    #[must_use]
    pub fn future<F>(fut: F) -> Self
    where
        F: Future<Output = Action> + Send + 'static,
    {
        Self::Future(Box::pin(async move { Some(fut.await) }))
    }

    /// `true` for [`Effect::None`]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_future() {
        let effect: Effect<u8> = Effect::future(async { 1 });
        assert_eq!(format!("{effect:?}"), "Effect::Future(<future>)");
    }

    #[test]
    fn test_is_none() {
        assert!(Effect::<u8>::None.is_none());
        assert!(!Effect::<u8>::future(async { 1 }).is_none());
    }
}
