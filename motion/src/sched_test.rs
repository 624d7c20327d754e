#![allow(clippy::float_cmp)]

use super::*;

fn manual() -> (Rc<ManualScheduler>, Rc<dyn Scheduler>) {
    let m = Rc::new(ManualScheduler::new());
    let s: Rc<dyn Scheduler> = m.clone();
    (m, s)
}

// --- ManualScheduler ---

#[test]
fn timers_fire_in_due_order() {
    let (m, s) = manual();
    let log = Rc::new(RefCell::new(Vec::new()));
    for (delay, tag) in [(300, "c"), (100, "a"), (200, "b"), (100, "a2")] {
        let log = Rc::clone(&log);
        s.set_timeout(delay, Box::new(move || log.borrow_mut().push(tag)));
    }
    m.advance(250.0);
    assert_eq!(*log.borrow(), vec!["a", "a2", "b"]);
    m.advance(50.0);
    assert_eq!(*log.borrow(), vec!["a", "a2", "b", "c"]);
    assert_eq!(m.pending_timers(), 0);
}

#[test]
fn nested_timer_within_window_fires() {
    let (m, s) = manual();
    let hit = Rc::new(Cell::new(0.0));
    let hit2 = Rc::clone(&hit);
    let inner_sched = Rc::clone(&s);
    let clock = Rc::clone(&m);
    s.set_timeout(
        100,
        Box::new(move || {
            inner_sched.set_timeout(50, Box::new(move || hit2.set(clock.now_ms())));
        }),
    );
    m.advance(200.0);
    assert_eq!(hit.get(), 150.0);
    assert_eq!(m.now_ms(), 200.0);
}

#[test]
fn frames_requested_during_frame_wait() {
    let (m, s) = manual();
    let s2 = Rc::clone(&s);
    s.request_frame(Box::new(move |_| s2.request_frame(Box::new(|_| {}))));
    assert_eq!(m.frame(), 1);
    assert_eq!(m.pending_frames(), 1);
    assert_eq!(m.frame(), 1);
    assert_eq!(m.frame(), 0);
}

// --- FrameLoop ---

#[test]
fn frame_loop_ticks_every_frame_until_cancelled() {
    let (m, s) = manual();
    let ticks = Rc::new(Cell::new(0));
    let t = Rc::clone(&ticks);
    let handle = FrameLoop::start(&s, move |_| {
        t.set(t.get() + 1);
        Flow::Continue
    });
    m.run_frames(5, 16.0);
    assert_eq!(ticks.get(), 5);
    assert!(handle.is_running());

    handle.cancel();
    m.run_frames(5, 16.0);
    assert_eq!(ticks.get(), 5);
    assert!(handle.is_cancelled());
    assert_eq!(m.pending_frames(), 0);
}

#[test]
fn frame_loop_stops_itself() {
    let (m, s) = manual();
    let ticks = Rc::new(Cell::new(0));
    let t = Rc::clone(&ticks);
    let handle = FrameLoop::start(&s, move |_| {
        t.set(t.get() + 1);
        if t.get() == 3 { Flow::Stop } else { Flow::Continue }
    });
    m.run_frames(10, 16.0);
    assert_eq!(ticks.get(), 3);
    assert!(!handle.is_running());
    assert!(!handle.is_cancelled());
}

#[test]
fn frame_loop_receives_timestamps() {
    let (m, s) = manual();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen2 = Rc::clone(&seen);
    FrameLoop::start(&s, move |ts| {
        seen2.borrow_mut().push(ts);
        Flow::Continue
    });
    m.run_frames(3, 10.0);
    assert_eq!(*seen.borrow(), vec![10.0, 20.0, 30.0]);
}

// --- ReadyQueue ---

#[test]
fn ready_queue_runs_in_registration_order_once() {
    let q = ReadyQueue::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for tag in ["hero", "counters", "extra"] {
        let log = Rc::clone(&log);
        q.push(move || log.borrow_mut().push(tag));
    }
    assert!(log.borrow().is_empty());
    assert!(q.fire());
    assert!(!q.fire());
    assert_eq!(*log.borrow(), vec!["hero", "counters", "extra"]);
}

#[test]
fn ready_queue_late_push_runs_immediately() {
    let q = ReadyQueue::new();
    q.fire();
    let ran = Rc::new(Cell::new(false));
    let r = Rc::clone(&ran);
    q.push(move || r.set(true));
    assert!(ran.get());
    assert!(q.has_fired());
}
