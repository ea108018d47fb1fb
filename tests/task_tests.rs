// Host-side tests for the cancel-then-start task slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod task {
    include!("../src/core/task.rs");
}

use std::cell::RefCell;
use std::rc::Rc;
use task::*;

#[derive(Debug)]
struct FakeTask {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Cancel for FakeTask {
    fn cancel(&self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn fake(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Option<FakeTask> {
    Some(FakeTask {
        id,
        log: log.clone(),
    })
}

#[test]
fn start_cancels_the_previous_task() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = TaskSlot::new();
    slot.start(fake(1, &log));
    assert!(slot.is_active());
    slot.start(fake(2, &log));
    assert_eq!(*log.borrow(), vec![1]);
    slot.start(fake(3, &log));
    assert_eq!(*log.borrow(), vec![1, 2]);
}

#[test]
fn cancel_is_idempotent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = TaskSlot::new();
    slot.cancel();
    slot.start(fake(7, &log));
    slot.cancel();
    slot.cancel();
    assert_eq!(*log.borrow(), vec![7]);
    assert!(!slot.is_active());
}

#[test]
fn renew_and_finish_do_not_cancel() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = TaskSlot::new();
    slot.start(fake(1, &log));
    slot.renew(fake(2, &log));
    slot.renew(fake(3, &log));
    assert!(log.borrow().is_empty());
    slot.cancel();
    assert_eq!(*log.borrow(), vec![3]);

    slot.start(fake(4, &log));
    slot.finish();
    slot.cancel();
    assert_eq!(*log.borrow(), vec![3]);
}

#[test]
fn starting_nothing_leaves_slot_empty() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = TaskSlot::new();
    slot.start(fake(1, &log));
    slot.start(None);
    assert!(!slot.is_active());
    assert_eq!(*log.borrow(), vec![1]);
}
