//! Timer port and the two clocks that implement it.
//!
//! The carousel never sleeps or spawns anything. It asks its port to schedule
//! one-shot wakeups, and the host drains due wakeups back into the carousel
//! from its own event loop (`Carousel::run_due`). Everything runs on the
//! host's single thread, so a cancelled handle can never be reported as due.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Opaque identity of one scheduled wakeup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait TimerPort {
    /// Monotonic time elapsed since the port was created.
    fn now(&self) -> Duration;

    /// Schedule a one-shot wakeup `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a wakeup. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);

    /// Remove and return every wakeup whose deadline has passed, earliest first.
    fn take_due(&mut self) -> Vec<TimerHandle>;

    /// Earliest pending deadline, measured like [`TimerPort::now`].
    fn next_deadline(&self) -> Option<Duration>;
}

/// Identifies which port scheduled a wakeup, so ports sharing one clock only
/// ever see their own.
type Owner = u64;

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Duration,
    handle: TimerHandle,
    owner: Owner,
}

#[derive(Debug, Default)]
struct PendingTimers {
    next_id: u64,
    entries: Vec<Pending>,
}

impl PendingTimers {
    fn schedule(&mut self, owner: Owner, now: Duration, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.entries.push(Pending {
            deadline: now.saturating_add(delay),
            handle,
            owner,
        });
        handle
    }

    fn cancel(&mut self, owner: Owner, handle: TimerHandle) {
        self.entries
            .retain(|p| !(p.owner == owner && p.handle == handle));
    }

    fn take_due(&mut self, owner: Owner, now: Duration) -> Vec<TimerHandle> {
        let mut due: Vec<(Duration, TimerHandle)> = Vec::new();
        self.entries.retain(|p| {
            if p.owner == owner && p.deadline <= now {
                due.push((p.deadline, p.handle));
                false
            } else {
                true
            }
        });
        due.sort_unstable();
        due.into_iter().map(|(_, h)| h).collect()
    }

    fn next_deadline(&self, owner: Owner) -> Option<Duration> {
        self.entries
            .iter()
            .filter(|p| p.owner == owner)
            .map(|p| p.deadline)
            .min()
    }
}

#[derive(Debug, Default)]
struct VirtualState {
    now: Duration,
    next_owner: Owner,
    pending: PendingTimers,
}

/// Manually advanced clock shared between a test (or simulation) and the
/// [`VirtualTimer`] handed to a carousel.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<VirtualState>>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new timer port reading and scheduling against this clock.
    ///
    /// Each port drains only the wakeups it scheduled itself, so several
    /// carousels can share one clock.
    pub fn timer(&self) -> VirtualTimer {
        let owner = {
            let mut state = self.state.borrow_mut();
            state.next_owner += 1;
            state.next_owner
        };
        VirtualTimer {
            clock: self.clone(),
            owner,
        }
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Move simulated time forward. Wakeups that become due are not delivered
    /// until the owner of the timer drains them.
    pub fn advance(&self, by: Duration) {
        let mut state = self.state.borrow_mut();
        state.now = state.now.saturating_add(by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Number of wakeups scheduled, across every port, and neither fired nor
    /// cancelled.
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.entries.len()
    }
}

/// Deterministic [`TimerPort`] driven by a [`VirtualClock`].
///
/// Clones share the same pending set; call [`VirtualClock::timer`] for an
/// independent port.
#[derive(Debug, Clone)]
pub struct VirtualTimer {
    clock: VirtualClock,
    owner: Owner,
}

impl VirtualTimer {
    pub fn clock(&self) -> &VirtualClock {
        &self.clock
    }
}

impl TimerPort for VirtualTimer {
    fn now(&self) -> Duration {
        self.clock.now()
    }

    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let mut state = self.clock.state.borrow_mut();
        let now = state.now;
        state.pending.schedule(self.owner, now, delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.clock
            .state
            .borrow_mut()
            .pending
            .cancel(self.owner, handle);
    }

    fn take_due(&mut self) -> Vec<TimerHandle> {
        let mut state = self.clock.state.borrow_mut();
        let now = state.now;
        state.pending.take_due(self.owner, now)
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.clock.state.borrow().pending.next_deadline(self.owner)
    }
}

/// A `SystemTimer` owns its pending set outright.
const SYSTEM_OWNER: Owner = 0;

/// Wall-clock [`TimerPort`] backed by [`Instant`], for interactive hosts.
#[derive(Debug)]
pub struct SystemTimer {
    origin: Instant,
    pending: PendingTimers,
}

impl Default for SystemTimer {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            pending: PendingTimers::default(),
        }
    }
}

impl SystemTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long a host may block before the next wakeup is due.
    pub fn time_until_due(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now()))
    }
}

impl TimerPort for SystemTimer {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let now = self.now();
        self.pending.schedule(SYSTEM_OWNER, now, delay)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.cancel(SYSTEM_OWNER, handle);
    }

    fn take_due(&mut self) -> Vec<TimerHandle> {
        let now = self.now();
        self.pending.take_due(SYSTEM_OWNER, now)
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.pending.next_deadline(SYSTEM_OWNER)
    }
}
