//! Notification model and the app-scoped publish bus.
//!
//! DESIGN
//! ======
//! - One notification slot. `show` overwrites content and bumps a
//!   generation counter; the dismissal timer captures the generation it was
//!   started for, so only the most recent `show` can close the toast.
//! - [`NotificationBus`] is the publish side. The toast surface installs
//!   itself on mount; publishing with no surface mounted is dropped.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::util::registry::{HandlerSlot, Registration};

/// Auto-dismiss delay after the most recent `show`.
pub const NOTIFICATION_DELAY_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Container, title and body classes.
    pub const fn classes(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::Success => ("bg-green-50 border-l-4 border-green-500", "text-green-800", "text-green-600"),
            Self::Error => ("bg-red-50 border-l-4 border-red-500", "text-red-800", "text-red-600"),
            Self::Info => ("bg-blue-50 border-l-4 border-blue-500", "text-blue-800", "text-blue-600"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotifyOptions {
    pub severity: Severity,
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
}

impl NotifyOptions {
    pub fn with_severity(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Fixed-position classes for the toast container.
    pub fn position_class(self) -> String {
        let vertical = match self.vertical {
            VerticalAnchor::Top => "top-4",
            VerticalAnchor::Center => "top-1/2 -translate-y-1/2",
            VerticalAnchor::Bottom => "bottom-4",
        };
        let horizontal = match self.horizontal {
            HorizontalAnchor::Left => "left-4",
            HorizontalAnchor::Center => "left-1/2 -translate-x-1/2",
            HorizontalAnchor::Right => "right-4",
        };
        format!("fixed {vertical} {horizontal}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub options: NotifyOptions,
}

/// Display state of the single toast slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub notification: Notification,
    pub open: bool,
    generation: u64,
}

impl ToastState {
    /// Replace the visible notification. Returns the generation the
    /// dismissal timer must pass to [`ToastState::expire`].
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.notification = notification;
        self.open = true;
        self.generation += 1;
        self.generation
    }

    /// Close the toast if `generation` is still the latest `show`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.open {
            return false;
        }
        self.open = false;
        true
    }

    /// Close immediately (close button or swipe).
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn container_class(&self) -> String {
        let options = self.notification.options;
        let (tone, _, _) = options.severity.classes();
        let visibility = if self.open { "opacity-100" } else { "opacity-0 pointer-events-none" };
        format!(
            "{} p-4 rounded-lg shadow-lg max-w-sm {tone} transition-all transform {visibility} z-50",
            options.position_class()
        )
    }
}

/// Application-scoped entry point for showing notifications.
#[derive(Clone, Debug, Default)]
pub struct NotificationBus {
    slot: HandlerSlot<Notification>,
}

impl NotificationBus {
    /// Install the display surface. Hold the registration for the lifetime
    /// of the mounted surface.
    #[must_use = "dropping the registration detaches the surface"]
    pub fn attach<F>(&self, surface: F) -> Registration<Notification>
    where
        F: Fn(Notification) + Send + Sync + 'static,
    {
        self.slot.install(surface)
    }

    pub fn has_surface(&self) -> bool {
        self.slot.is_installed()
    }

    /// Publish a notification. Returns `false` when no surface is mounted.
    pub fn show(&self, title: impl Into<String>, body: impl Into<String>, options: NotifyOptions) -> bool {
        let notification = Notification {
            title: title.into(),
            body: body.into(),
            options,
        };
        let delivered = self.slot.dispatch(notification);
        if !delivered {
            log::debug!("notification dropped: no toast surface mounted");
        }
        delivered
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) -> bool {
        self.show(title, body, NotifyOptions::with_severity(Severity::Success))
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) -> bool {
        self.show(title, body, NotifyOptions::with_severity(Severity::Error))
    }

    pub fn info(&self, title: impl Into<String>, body: impl Into<String>) -> bool {
        self.show(title, body, NotifyOptions::default())
    }
}
