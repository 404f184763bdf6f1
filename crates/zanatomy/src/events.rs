//! Host-driven event bus
//!
//! Callbacks subscribe to active-object changes or run on a timer. Nothing
//! happens on its own: the host calls [`EventBus::dispatch`] to deliver
//! queued notifications and [`EventBus::advance`] as time passes.

use std::time::Duration;

use derive_more::Display;
use log::{debug, trace};
use scene_tree::{HostEvent, NodeId, SceneGraph};

/// A scene that queues notifications for the bus to pick up
pub trait EventSource {
    /// Take every notification queued since the last call
    fn drain_events(&mut self) -> Vec<HostEvent>;
}

impl EventSource for SceneGraph {
    fn drain_events(&mut self) -> Vec<HostEvent> {
        SceneGraph::drain_events(self)
    }
}

/// Identifies whoever registered a subscription or timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "Owner({})", _0)]
pub struct Owner(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "SubscriptionId({})", _0)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "TimerId({})", _0)]
pub struct TimerId(u64);

/// A net change of the active object over one dispatch round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: Option<NodeId>,
    pub current: Option<NodeId>,
}

type ActiveCallback<H> = Box<dyn FnMut(&mut H, ActiveChange)>;
type TimerCallback<H> = Box<dyn FnMut(&mut H) -> bool>;

struct Subscription<H> {
    id: SubscriptionId,
    owner: Owner,
    callback: ActiveCallback<H>,
}

struct Timer<H> {
    id: TimerId,
    owner: Owner,
    interval: Duration,
    remaining: Duration,
    callback: TimerCallback<H>,
}

/// Subscriptions and timers over a host of type `H`
pub struct EventBus<H> {
    next_id: u64,
    subscriptions: Vec<Subscription<H>>,
    timers: Vec<Timer<H>>,
}

impl<H> Default for EventBus<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscriptions: Vec::new(),
            timers: Vec::new(),
        }
    }
}

impl<H> EventBus<H> {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Allocate a fresh owner key
    pub fn owner(&mut self) -> Owner {
        Owner(self.next_id())
    }

    /// Call `callback` whenever the active object changes
    pub fn subscribe_active<F>(&mut self, owner: Owner, callback: F) -> SubscriptionId
    where
        F: FnMut(&mut H, ActiveChange) + 'static,
    {
        let id = SubscriptionId(self.next_id());
        self.subscriptions.push(Subscription {
            id,
            owner,
            callback: Box::new(callback),
        });
        debug!("{} subscribed to active changes as {}", owner, id);
        id
    }

    /// Call `callback` every `interval` until it returns false
    pub fn register_timer<F>(&mut self, owner: Owner, interval: Duration, callback: F) -> TimerId
    where
        F: FnMut(&mut H) -> bool + 'static,
    {
        let id = TimerId(self.next_id());
        self.timers.push(Timer {
            id,
            owner,
            interval,
            remaining: interval,
            callback: Box::new(callback),
        });
        debug!("{} registered {} every {:?}", owner, id, interval);
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn unregister_timer(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Drop every subscription and timer of `owner`, returning how many went
    pub fn clear_by_owner(&mut self, owner: Owner) -> usize {
        let before = self.subscriptions.len() + self.timers.len();
        self.subscriptions.retain(|s| s.owner != owner);
        self.timers.retain(|t| t.owner != owner);
        let removed = before - self.subscriptions.len() - self.timers.len();
        debug!("Cleared {} handles of {}", removed, owner);
        removed
    }

    /// Whether `owner` still holds any subscription or timer
    pub fn is_owned(&self, owner: Owner) -> bool {
        self.subscriptions.iter().any(|s| s.owner == owner)
            || self.timers.iter().any(|t| t.owner == owner)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// Fire every timer that came due within `elapsed`
    ///
    /// A timer fires at most once per call however late it is. Returns the
    /// number of callbacks run.
    pub fn advance(&mut self, host: &mut H, elapsed: Duration) -> usize {
        let mut fired = 0;
        self.timers.retain_mut(|timer| {
            timer.remaining = timer.remaining.saturating_sub(elapsed);
            if !timer.remaining.is_zero() {
                return true;
            }
            fired += 1;
            timer.remaining = timer.interval;
            let keep = (timer.callback)(host);
            if !keep {
                trace!("{} finished", timer.id);
            }
            keep
        });
        fired
    }
}

impl<H: EventSource> EventBus<H> {
    /// Deliver the host's queued notifications
    ///
    /// Active changes queued since the last dispatch are merged into one
    /// net change, delivered once to every subscriber. A round trip back to
    /// the original active object delivers nothing. Returns the number of
    /// callbacks run.
    pub fn dispatch(&mut self, host: &mut H) -> usize {
        let mut merged: Option<ActiveChange> = None;

        for event in host.drain_events() {
            trace!("Host event: {:?}", event);
            match event {
                HostEvent::ActiveChanged { previous, current } => {
                    merged = Some(match merged {
                        None => ActiveChange { previous, current },
                        Some(change) => ActiveChange {
                            previous: change.previous,
                            current,
                        },
                    });
                }
            }
        }

        let Some(change) = merged.filter(|c| c.previous != c.current) else {
            return 0;
        };
        debug!(
            "Active changed {:?} -> {:?}, notifying {} subscribers",
            change.previous,
            change.current,
            self.subscriptions.len()
        );
        for subscription in &mut self.subscriptions {
            (subscription.callback)(host, change);
        }
        self.subscriptions.len()
    }
}
