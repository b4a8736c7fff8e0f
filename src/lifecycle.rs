//! Lifecycle-derived presentation: advisory banners, power-control gating,
//! and the status indicator tone.

/// Three-way presentation state derived from server metadata flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Installing,
    Transferring,
    Normal,
}

impl Presentation {
    /// Installing wins if both flags are somehow set.
    pub fn derive(is_installing: bool, is_transferring: bool) -> Self {
        if is_installing {
            Presentation::Installing
        } else if is_transferring {
            Presentation::Transferring
        } else {
            Presentation::Normal
        }
    }

    /// Advisory banner text, or `None` when the server is operable.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Presentation::Installing => Some(
                "This server is currently running its installation process \
                 and actions are unavailable.",
            ),
            Presentation::Transferring => Some(
                "This server is currently being transferred and actions are \
                 unavailable.",
            ),
            Presentation::Normal => None,
        }
    }

    /// Power controls render only in the normal state.
    pub fn controls_enabled(&self) -> bool {
        matches!(self, Presentation::Normal)
    }
}

/// Operator power controls the pane can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Start,
    Stop,
    Restart,
    Kill,
}

impl PowerAction {
    /// Permission key the external evaluator understands. Kill is gated by
    /// the stop permission, matching the panel's permission model.
    pub fn permission(&self) -> &'static str {
        match self {
            PowerAction::Start => "control.start",
            PowerAction::Restart => "control.restart",
            PowerAction::Stop | PowerAction::Kill => "control.stop",
        }
    }
}

/// External permission evaluator; consulted only for control visibility.
/// Enforcement happens server-side, not here.
pub trait PermissionCheck {
    fn allowed(&self, permission: &str) -> bool;
}

/// Whether a control for `action` should render at all.
pub fn can_invoke(
    presentation: Presentation,
    perms: &dyn PermissionCheck,
    action: PowerAction,
) -> bool {
    presentation.controls_enabled() && perms.allowed(action.permission())
}

/// Reported run state of the managed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    Offline,
    Starting,
    Running,
    Stopping,
}

/// Color class for the status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Danger,
    Success,
    Caution,
}

/// Offline shows red, running green, anything else (unknown, transitional,
/// or a server mid-install) yellow.
pub fn status_tone(status: Option<PowerStatus>, is_installing: bool) -> StatusTone {
    if is_installing {
        return StatusTone::Caution;
    }
    match status {
        Some(PowerStatus::Offline) => StatusTone::Danger,
        Some(PowerStatus::Running) => StatusTone::Success,
        _ => StatusTone::Caution,
    }
}
