//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (search submits, overlay changes, toolkit clicks).
    pub print_ui_interactions: bool,
    /// Emit every session transition with the effects it produced.
    pub print_session_transitions: bool,
    /// Emit counter animation start/replace events.
    pub print_counter_events: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_session_transitions: false,
    print_counter_events: false,
    print_shutdown: false,
};
