//! Drawing surface binding and context-loss handling.

use std::rc::Rc;

use crate::error::HostError;

/// DOM event name for graphics context loss on a canvas.
pub const CONTEXT_LOST_EVENT: &str = "webglcontextlost";

pub const DEFAULT_CONTEXT_LOST_MESSAGE: &str =
    "WebGL context lost. You will need to reload the page.";

/// The event delivered when a surface's graphics context becomes invalid.
pub trait SurfaceLossEvent {
    /// Suppress the host's default handling (automatic restore attempts).
    fn prevent_default(&self);
}

/// Synchronous, blocking user notification.
pub trait Notifier {
    fn alert(&self, message: &str);
}

pub type ContextLostHandler = Box<dyn FnMut(&dyn SurfaceLossEvent)>;

/// A drawing-surface element the module renders into.
///
/// Clones must refer to the same underlying element.
pub trait DrawingSurface: Clone {
    /// Register `handler` for every context-loss signal on this surface.
    ///
    /// The listener stays registered for the lifetime of the page.
    fn on_context_lost(&self, handler: ContextLostHandler) -> Result<(), HostError>;
}

/// Arms `surface` so each context loss alerts the user with `message` and
/// suppresses the default handling.
///
/// Every occurrence alerts once; repeated signals are not debounced.
pub fn arm_context_lost<C: DrawingSurface>(
    surface: &C,
    notifier: Rc<dyn Notifier>,
    message: &str,
) -> Result<(), HostError> {
    let message = message.to_owned();
    surface.on_context_lost(Box::new(move |event: &dyn SurfaceLossEvent| {
        notifier.alert(&message);
        event.prevent_default();
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeSurface, RecordingNotifier};

    #[test]
    fn loss_alerts_once_and_prevents_default() {
        let surface = FakeSurface::default();
        let notifier = RecordingNotifier::default();
        arm_context_lost(&surface, Rc::new(notifier.clone()), DEFAULT_CONTEXT_LOST_MESSAGE)
            .unwrap();

        let event = surface.lose_context();
        assert!(event.default_prevented());
        assert_eq!(notifier.messages(), vec![DEFAULT_CONTEXT_LOST_MESSAGE.to_string()]);
    }

    #[test]
    fn nothing_happens_before_the_signal() {
        let surface = FakeSurface::default();
        let notifier = RecordingNotifier::default();
        arm_context_lost(&surface, Rc::new(notifier.clone()), "lost").unwrap();

        assert_eq!(surface.listener_count(), 1);
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn repeated_loss_alerts_every_time() {
        let surface = FakeSurface::default();
        let notifier = RecordingNotifier::default();
        arm_context_lost(&surface, Rc::new(notifier.clone()), "lost").unwrap();

        for _ in 0..3 {
            assert!(surface.lose_context().default_prevented());
        }
        assert_eq!(notifier.messages().len(), 3);
    }

    #[test]
    fn registration_failure_is_reported() {
        let surface = FakeSurface::rejecting_listeners();
        let err = arm_context_lost(&surface, Rc::new(RecordingNotifier::default()), "lost")
            .unwrap_err();
        assert!(matches!(err, HostError::Listener { ref event, .. } if event == CONTEXT_LOST_EVENT));
    }
}
