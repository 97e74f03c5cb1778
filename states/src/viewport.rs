//! Viewport width observation.
//!
//! The host measures the display width and feeds it to a [`ViewportObserver`].
//! Widgets hold a [`ViewportSubscription`] for as long as they are mounted and
//! poll it for the latest [`ViewportMode`]. Dropping the subscription releases
//! it from the observer.
//!
//! Everything here lives on the UI thread, so the observer is shared through
//! `Rc` rather than a lock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use flume::{Receiver, Sender};

/// Widths at or below this many logical points count as mobile.
pub const MOBILE_BREAKPOINT: f32 = 992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    #[default]
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub fn from_width(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

#[derive(Debug, Default)]
struct Registry {
    width: Option<f32>,
    next_id: u64,
    subscribers: Vec<(u64, Sender<f32>)>,
}

/// Publishes viewport width changes to subscribed widgets.
#[derive(Debug, Clone, Default)]
pub struct ViewportObserver {
    registry: Rc<RefCell<Registry>>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// An observer that already knows the viewport width.
    pub fn fixed(width: f32) -> Self {
        let observer = Self::new();
        observer.observe(width);
        observer
    }

    /// The last measured width, if any.
    pub fn width(&self) -> Option<f32> {
        self.registry.borrow().width
    }

    pub fn mode(&self) -> Option<ViewportMode> {
        self.width().map(ViewportMode::from_width)
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    /// Records a measurement. Subscribers are notified only when the width
    /// actually changed since the previous measurement.
    pub fn observe(&self, width: f32) {
        let mut registry = self.registry.borrow_mut();
        if registry
            .width
            .is_some_and(|last| (last - width).abs() < f32::EPSILON)
        {
            return;
        }

        log::trace!("Viewport resized to {width}");
        registry.width = Some(width);

        let before = registry.subscribers.len();
        registry
            .subscribers
            .retain(|(_, sender)| sender.send(width).is_ok());
        let pruned = before - registry.subscribers.len();
        if pruned > 0 {
            log::debug!("Pruned {pruned} disconnected viewport subscribers");
        }
    }

    /// Registers a new subscriber. The current width, when known, is queued
    /// right away so the first poll reflects the real viewport.
    pub fn subscribe(&self) -> ViewportSubscription {
        let (sender, receiver) = flume::unbounded();
        let mut registry = self.registry.borrow_mut();

        if let Some(width) = registry.width {
            // The receiver is alive in this scope, so the send cannot fail.
            let _ = sender.send(width);
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, sender));
        log::debug!("Viewport subscriber {id} registered");

        ViewportSubscription {
            id,
            receiver,
            registry: Rc::downgrade(&self.registry),
        }
    }
}

/// A widget's handle on viewport changes. Released on drop.
#[derive(Debug)]
pub struct ViewportSubscription {
    id: u64,
    receiver: Receiver<f32>,
    registry: Weak<RefCell<Registry>>,
}

impl ViewportSubscription {
    /// Drains pending resize events and returns the mode for the latest one.
    pub fn poll(&self) -> Option<ViewportMode> {
        self.receiver.try_iter().last().map(ViewportMode::from_width)
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
            log::debug!("Viewport subscriber {} released", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::from_width(992.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(991.5), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(993.0), ViewportMode::Desktop);
    }

    #[test]
    fn mode_follows_last_measurement() {
        let observer = ViewportObserver::new();
        assert_eq!(observer.mode(), None);

        observer.observe(1280.0);
        assert_eq!(observer.mode(), Some(ViewportMode::Desktop));

        observer.observe(992.0);
        assert_eq!(observer.mode(), Some(ViewportMode::Mobile));
        assert!(observer.mode().is_some_and(ViewportMode::is_mobile));
    }

    #[test]
    fn subscription_without_measurement_has_nothing_to_report() {
        let observer = ViewportObserver::new();
        let subscription = observer.subscribe();
        assert_eq!(subscription.poll(), None);
    }

    #[test]
    fn subscribe_delivers_current_width_immediately() {
        let observer = ViewportObserver::fixed(640.0);
        let subscription = observer.subscribe();
        assert_eq!(subscription.poll(), Some(ViewportMode::Mobile));
        assert_eq!(subscription.poll(), None, "events are drained by poll");
    }

    #[test]
    fn poll_reports_latest_of_several_resizes() {
        let observer = ViewportObserver::new();
        let subscription = observer.subscribe();

        observer.observe(500.0);
        observer.observe(1200.0);
        assert_eq!(subscription.poll(), Some(ViewportMode::Desktop));

        observer.observe(900.0);
        assert_eq!(subscription.poll(), Some(ViewportMode::Mobile));
    }

    #[test]
    fn unchanged_width_is_not_an_event() {
        let observer = ViewportObserver::new();
        let subscription = observer.subscribe();

        observer.observe(1200.0);
        assert!(subscription.poll().is_some());

        observer.observe(1200.0);
        assert_eq!(subscription.poll(), None);
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let observer = ViewportObserver::new();
        let first = observer.subscribe();
        let second = observer.subscribe();
        assert_eq!(observer.subscriber_count(), 2);

        drop(first);
        assert_eq!(observer.subscriber_count(), 1);

        drop(second);
        assert_eq!(observer.subscriber_count(), 0);
    }

    #[test]
    fn subscriptions_are_independent() {
        let observer = ViewportObserver::new();
        let a = observer.subscribe();
        observer.observe(800.0);
        let b = observer.subscribe();

        assert_eq!(a.poll(), Some(ViewportMode::Mobile));
        assert_eq!(b.poll(), Some(ViewportMode::Mobile));

        observer.observe(1600.0);
        assert_eq!(a.poll(), Some(ViewportMode::Desktop));
        drop(a);
        assert_eq!(b.poll(), Some(ViewportMode::Desktop));
    }

    #[test]
    fn subscription_outliving_observer_drops_cleanly() {
        let observer = ViewportObserver::fixed(1000.0);
        let subscription = observer.subscribe();
        drop(observer);
        assert_eq!(subscription.poll(), Some(ViewportMode::Desktop));
        drop(subscription);
    }
}
