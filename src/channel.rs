//! The event channel seam: what the pane needs from the dashboard's shared
//! connection wrapper, and the subscription handle that keeps listener
//! registration leak-free across reconnects.

use std::fmt;
use std::rc::Rc;

use tracing::trace;

/// Push events the pane consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Periodic stats push carrying a serialized snapshot payload.
    Stats,
}

/// Outbound requests the pane issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Ask the producer to push current stats immediately instead of
    /// waiting for its natural interval.
    SendStats,
}

/// Identity of one live connection; a reconnect yields a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub u64);

/// Identifies one registered listener on one channel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerToken(pub u64);

/// Handler invoked synchronously with each raw stats payload.
pub type StatsHandler = Rc<dyn Fn(&str)>;

/// The narrow interface onto the shared connection. Other components may
/// hold their own listeners on the same channel, so implementations hand
/// out tokens and each consumer removes only its own registration.
pub trait EventChannel {
    fn connected(&self) -> bool;

    /// Present while a live connection exists; changes across reconnects.
    fn instance(&self) -> Option<InstanceId>;

    fn add_listener(&self, kind: EventKind, handler: StatsHandler) -> ListenerToken;

    /// Must tolerate tokens from an earlier connection (no-op removal).
    fn remove_listener(&self, kind: EventKind, token: ListenerToken);

    fn send(&self, request: RequestKind);
}

/// One live listener registration. Dropping the handle removes the listener
/// from the exact channel object it was registered on, so a stale instance
/// is never left holding a dangling handler.
pub struct Subscription {
    channel: Rc<dyn EventChannel>,
    kind: EventKind,
    token: ListenerToken,
    instance: InstanceId,
}

impl Subscription {
    pub(crate) fn new(
        channel: Rc<dyn EventChannel>,
        kind: EventKind,
        token: ListenerToken,
        instance: InstanceId,
    ) -> Self {
        Self {
            channel,
            kind,
            token,
            instance,
        }
    }

    /// The instance this listener was registered on.
    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Explicit cancel; equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        trace!(
            token = self.token.0,
            instance = self.instance.0,
            "removing stats listener"
        );
        self.channel.remove_listener(self.kind, self.token);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("token", &self.token)
            .field("instance", &self.instance)
            .finish()
    }
}
