use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Records what the navbar asks of its timer instead of waiting.
#[derive(Default)]
struct FakeDebouncer {
    pending: Option<Box<dyn FnOnce()>>,
    scheduled: usize,
    cancelled: usize,
}

impl Debounce for FakeDebouncer {
    fn schedule(&mut self, task: impl FnOnce() + 'static) {
        self.scheduled += 1;
        self.pending = Some(Box::new(task));
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
        self.pending = None;
    }
}

impl FakeDebouncer {
    /// Let the quiet period elapse for whatever is pending.
    fn elapse(&mut self) {
        if let Some(task) = self.pending.take() {
            task();
        }
    }
}

type Fired = Rc<RefCell<Vec<SearchTicket>>>;

fn type_into(bridge: &mut SearchBridge, debouncer: &mut FakeDebouncer, fired: &Fired, raw: &str) {
    let input = bridge.input(raw);
    let fired = Rc::clone(fired);
    dispatch_search_input(input, debouncer, move |ticket| fired.borrow_mut().push(ticket));
}

#[test]
fn each_keystroke_replaces_the_pending_timer() {
    let mut bridge = SearchBridge::default();
    let mut debouncer = FakeDebouncer::default();
    let fired = Fired::default();

    type_into(&mut bridge, &mut debouncer, &fired, "P");
    type_into(&mut bridge, &mut debouncer, &fired, "Pu");
    assert_eq!(debouncer.scheduled, 2);

    debouncer.elapse();
    let fired = fired.borrow();
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].query, "Pu");
    assert_eq!(bridge.fire(&fired[0]).as_deref(), Some("Pu"));
}

#[test]
fn clearing_the_box_cancels_the_timer() {
    let mut bridge = SearchBridge::default();
    let mut debouncer = FakeDebouncer::default();
    let fired = Fired::default();

    type_into(&mut bridge, &mut debouncer, &fired, "Pune");
    type_into(&mut bridge, &mut debouncer, &fired, "  ");
    assert_eq!(debouncer.cancelled, 1);

    debouncer.elapse();
    assert!(fired.borrow().is_empty());
    assert!(!bridge.is_busy());
}

#[test]
fn unchanged_query_keeps_the_running_timer() {
    let mut bridge = SearchBridge::default();
    let mut debouncer = FakeDebouncer::default();
    let fired = Fired::default();

    type_into(&mut bridge, &mut debouncer, &fired, "Pune");
    type_into(&mut bridge, &mut debouncer, &fired, "Pune ");
    assert_eq!(debouncer.scheduled, 1);
    assert_eq!(debouncer.cancelled, 0);

    debouncer.elapse();
    assert_eq!(fired.borrow().len(), 1);
    assert_eq!(fired.borrow()[0].query, "Pune");
}
