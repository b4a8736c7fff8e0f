//! Core logic for a managed server's live-status pane: attaches to a
//! push-based event channel, decodes periodic status snapshots, reconciles
//! them into display-ready metrics, and gates operator power controls on
//! the server's lifecycle state.
//!
//! Presentation (layout, styling, icons) is out of scope here; callers
//! read the computed values and render them however they like. The event
//! channel, server metadata, and permission evaluation are external
//! collaborators reached through the traits in [`channel`] and
//! [`lifecycle`].

pub mod channel;
pub mod format;
pub mod lifecycle;
pub mod metrics;
pub mod pane;
pub mod server;
pub mod snapshot;

pub use channel::{
    EventChannel, EventKind, InstanceId, ListenerToken, RequestKind, StatsHandler, Subscription,
};
pub use lifecycle::{
    can_invoke, status_tone, PermissionCheck, PowerAction, PowerStatus, Presentation, StatusTone,
};
pub use metrics::{DisplayMetrics, MetricsReconciler};
pub use pane::{StatusPane, SubscriptionManager};
pub use server::{Allocation, Limits, ServerInfo};
pub use snapshot::{decode, DecodeError};
