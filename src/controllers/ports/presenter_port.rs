use crate::controllers::events::update_event::UpdateEvent;

/// Receives every applied state change. Called on the update context, so
/// implementations must return quickly and must not wait on session
/// operations.
pub trait PresenterPort: Send + Sync {
    fn present(&self, event: UpdateEvent);
}
