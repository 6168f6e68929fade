//! Event system for UI decoupling.
//!
//! Allows CLI/GUI front ends to subscribe to flash-tool events without
//! tight coupling to the core logic.

/// Events emitted by the core.
#[derive(Debug, Clone)]
pub enum PcmEvent {
    /// Message meant for the user's eyes.
    UserMessage { message: String },
    /// Diagnostic detail, normally hidden.
    DebugMessage { message: String },
    /// Short description of the current activity.
    Activity { description: String },
    /// Progress through the current operation.
    PercentDone { percent: u32 },
    /// Retry counter for the current operation.
    RetryCount { retries: u32 },
    /// The current operation finished.
    Complete,
}

/// Observer trait for receiving flash-tool events.
///
/// Implement this trait in your UI layer to receive updates.
pub trait PcmObserver: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: &PcmEvent);
}

/// No-op observer that discards all events.
pub struct NullObserver;

impl PcmObserver for NullObserver {
    fn on_event(&self, _event: &PcmEvent) {
        // Do nothing
    }
}

/// Observer that logs events using tracing.
pub struct TracingObserver;

impl PcmObserver for TracingObserver {
    fn on_event(&self, event: &PcmEvent) {
        match event {
            PcmEvent::UserMessage { message } => {
                tracing::info!("{}", message);
            }
            PcmEvent::DebugMessage { message } => {
                tracing::debug!("{}", message);
            }
            PcmEvent::Activity { description } => {
                tracing::info!(activity = %description, "Status");
            }
            PcmEvent::PercentDone { percent } => {
                tracing::debug!(percent = percent, "Progress");
            }
            PcmEvent::RetryCount { retries } => {
                tracing::debug!(retries = retries, "Retrying");
            }
            PcmEvent::Complete => {
                tracing::info!("Operation complete");
            }
        }
    }
}
