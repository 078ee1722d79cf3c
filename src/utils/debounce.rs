use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once resizing has been
/// quiet for `delay_ms`.
///
/// Returns `None` outside a browser window. The listener is removed when
/// the returned value is dropped, and a pending callback is cancelled with
/// it.
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let callback = callback.clone();
        // Replacing the handle drops, and so cancels, the previous timeout
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || callback()));
    }))
}
