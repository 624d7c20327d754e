//! Scheduling: deferred callbacks, self-rescheduling frame loops, ordered
//! ready callbacks, and a virtual clock.
//!
//! DESIGN
//! ======
//! Everything runs on one thread with run-to-completion callbacks. The
//! [`Scheduler`] trait is the only seam to the host event loop: the browser
//! host backs it with `setTimeout` / `requestAnimationFrame`, tests and other
//! non-browser harnesses back it with [`ManualScheduler`].
//!
//! A [`FrameLoop`] re-requests a frame after every tick until the tick asks
//! to stop or its [`LoopHandle`] is cancelled. Page-lifetime loops (cursor
//! ring, card tilt) never stop on their own; the handle lets a harness tear
//! them down.

#[cfg(test)]
#[path = "sched_test.rs"]
mod sched_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A one-shot callback.
pub type Task = Box<dyn FnOnce()>;

/// A one-shot frame callback receiving the frame timestamp in milliseconds.
pub type FrameTask = Box<dyn FnOnce(f64)>;

/// Host event loop capability.
pub trait Scheduler {
    /// Run `task` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u32, task: Task);

    /// Run `task` once on the next display frame.
    fn request_frame(&self, task: FrameTask);

    /// Current monotonic time in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Whether a frame loop wants another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopStatus {
    Running,
    Finished,
    Cancelled,
}

/// Handle to a running [`FrameLoop`].
#[derive(Debug, Clone)]
pub struct LoopHandle {
    status: Rc<Cell<LoopStatus>>,
}

impl LoopHandle {
    fn new() -> Self {
        Self { status: Rc::new(Cell::new(LoopStatus::Running)) }
    }

    /// Stop the loop. The already requested frame still arrives but does
    /// nothing and requests no further frame.
    pub fn cancel(&self) {
        if self.status.get() == LoopStatus::Running {
            self.status.set(LoopStatus::Cancelled);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status.get() == LoopStatus::Running
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status.get() == LoopStatus::Cancelled
    }
}

/// A repeating per-frame task.
pub struct FrameLoop;

impl FrameLoop {
    /// Start ticking `tick` every frame, beginning with the next one.
    pub fn start<F>(sched: &Rc<dyn Scheduler>, tick: F) -> LoopHandle
    where
        F: FnMut(f64) -> Flow + 'static,
    {
        let handle = LoopHandle::new();
        request_next(Rc::clone(sched), Rc::new(RefCell::new(tick)), handle.clone());
        handle
    }
}

fn request_next<F>(sched: Rc<dyn Scheduler>, tick: Rc<RefCell<F>>, handle: LoopHandle)
where
    F: FnMut(f64) -> Flow + 'static,
{
    let next_sched = Rc::clone(&sched);
    sched.request_frame(Box::new(move |ts| {
        if !handle.is_running() {
            return;
        }
        let flow = (&mut *tick.borrow_mut())(ts);
        match flow {
            Flow::Continue => request_next(next_sched, tick, handle),
            Flow::Stop => handle.status.set(LoopStatus::Finished),
        }
    }));
}

#[derive(Default)]
struct ReadyInner {
    fired: bool,
    pending: Vec<Task>,
}

/// Ordered one-shot "on ready" callbacks.
///
/// Callbacks run in registration order when the queue fires. A callback
/// registered after firing runs immediately. Firing twice is a no-op.
#[derive(Clone, Default)]
pub struct ReadyQueue {
    inner: Rc<RefCell<ReadyInner>>,
}

impl ReadyQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, cb: impl FnOnce() + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.fired {
                inner.pending.push(Box::new(cb));
                return;
            }
        }
        cb();
    }

    /// Run every pending callback. Returns `false` if the queue had already
    /// fired.
    pub fn fire(&self) -> bool {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.fired {
                return false;
            }
            inner.fired = true;
            std::mem::take(&mut inner.pending)
        };
        for cb in pending {
            cb();
        }
        true
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.inner.borrow().fired
    }
}

struct Timer {
    due: f64,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualInner {
    now: f64,
    seq: u64,
    timers: Vec<Timer>,
    frames: Vec<FrameTask>,
}

/// Virtual-clock scheduler. Time moves only when told to.
///
/// Timers fire in due order (ties in scheduling order) during [`advance`];
/// frame callbacks run only on [`frame`].
///
/// [`advance`]: ManualScheduler::advance
/// [`frame`]: ManualScheduler::frame
#[derive(Default)]
pub struct ManualScheduler {
    inner: RefCell<ManualInner>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, firing every timer that comes due, including
    /// timers scheduled by those timers.
    pub fn advance(&self, ms: f64) {
        let end = self.inner.borrow().now + ms.max(0.0);
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let idx = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= end)
                    .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
                    .map(|(i, _)| i);
                if let Some(i) = idx {
                    let timer = inner.timers.remove(i);
                    inner.now = inner.now.max(timer.due);
                    Some(timer.task)
                } else {
                    inner.now = end;
                    None
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }

    /// Deliver one display frame at the current time. Callbacks requested
    /// during this frame wait for the next one. Returns how many ran.
    pub fn frame(&self) -> usize {
        let (now, frames) = {
            let mut inner = self.inner.borrow_mut();
            (inner.now, std::mem::take(&mut inner.frames))
        };
        let count = frames.len();
        for f in frames {
            f(now);
        }
        count
    }

    /// Advance by `frame_ms` and deliver a frame, `n` times.
    pub fn run_frames(&self, n: usize, frame_ms: f64) {
        for _ in 0..n {
            self.advance(frame_ms);
            self.frame();
        }
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.inner.borrow().frames.len()
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task) {
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + f64::from(delay_ms);
        let seq = inner.seq;
        inner.seq += 1;
        inner.timers.push(Timer { due, seq, task });
    }

    fn request_frame(&self, task: FrameTask) {
        self.inner.borrow_mut().frames.push(task);
    }

    fn now_ms(&self) -> f64 {
        self.inner.borrow().now
    }
}
