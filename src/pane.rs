//! Pane state: the subscription state machine and the view-scoped metrics
//! record it feeds.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::channel::{EventChannel, EventKind, InstanceId, RequestKind, Subscription};
use crate::metrics::{DisplayMetrics, MetricsReconciler};

/// Attaches to and detaches from the event channel as connectivity and the
/// channel instance change. Reconnect policy lives with the channel; this
/// only reacts to the transitions reported through [`sync`].
///
/// [`sync`]: SubscriptionManager::sync
pub struct SubscriptionManager {
    reconciler: Rc<RefCell<MetricsReconciler>>,
    active: Option<Subscription>,
}

impl SubscriptionManager {
    pub fn new(reconciler: Rc<RefCell<MetricsReconciler>>) -> Self {
        Self {
            reconciler,
            active: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// Reconcile the binding against the channel's current state. Called on
    /// every connectivity or instance change. A stale binding is always
    /// dropped before a fresh one is registered, so listeners never
    /// accumulate across reconnects.
    pub fn sync(&mut self, channel: Option<&Rc<dyn EventChannel>>) {
        let desired = channel.and_then(|ch| {
            if ch.connected() {
                ch.instance().map(|id| (ch, id))
            } else {
                None
            }
        });

        let stale = match (&self.active, &desired) {
            (Some(sub), Some((_, id))) => sub.instance() != *id,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if stale {
            self.detach();
            // A replaced instance restarts from zeroed metrics.
            if desired.is_some() {
                self.reconciler.borrow_mut().reset();
            }
        }

        if self.active.is_none() {
            if let Some((ch, id)) = desired {
                self.attach(ch, id);
            }
        }
    }

    /// Remove our listener, if any. Safe to call at any time, any number of
    /// times, including before a first attach.
    pub fn detach(&mut self) {
        if let Some(sub) = self.active.take() {
            sub.cancel();
        }
    }

    fn attach(&mut self, channel: &Rc<dyn EventChannel>, instance: InstanceId) {
        let reconciler = Rc::clone(&self.reconciler);
        let handler: Rc<dyn Fn(&str)> = Rc::new(move |raw: &str| {
            reconciler.borrow_mut().apply_frame(raw);
        });
        let token = channel.add_listener(EventKind::Stats, handler);
        debug!(instance = instance.0, "attached stats listener");
        self.active = Some(Subscription::new(
            Rc::clone(channel),
            EventKind::Stats,
            token,
            instance,
        ));
        // The first snapshot must not wait for the producer's interval.
        channel.send(RequestKind::SendStats);
    }
}

/// Everything the live-status pane owns for one mounted view. Created on
/// mount, dropped on unmount; dropping detaches the listener.
pub struct StatusPane {
    reconciler: Rc<RefCell<MetricsReconciler>>,
    subscription: SubscriptionManager,
}

impl StatusPane {
    pub fn new() -> Self {
        let reconciler = Rc::new(RefCell::new(MetricsReconciler::new()));
        let subscription = SubscriptionManager::new(Rc::clone(&reconciler));
        Self {
            reconciler,
            subscription,
        }
    }

    /// The latest display record; all zeros until a snapshot arrives (or
    /// indefinitely, if none ever does).
    pub fn metrics(&self) -> DisplayMetrics {
        self.reconciler.borrow().current()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_attached()
    }

    /// Feed the current channel state; pass `None` while no channel exists.
    pub fn sync_channel(&mut self, channel: Option<&Rc<dyn EventChannel>>) {
        self.subscription.sync(channel);
    }

    /// Unmount path: detach the listener and clear the metrics record.
    /// Idempotent.
    pub fn detach(&mut self) {
        self.subscription.detach();
        self.reconciler.borrow_mut().reset();
    }
}

impl Default for StatusPane {
    fn default() -> Self {
        Self::new()
    }
}
