use std::{cell::RefCell, ops::Deref, rc::Rc};

use yew::prelude::*;

struct Subscriber<T> {
    id: usize,
    callback: Callback<T>,
}

struct Inner<T> {
    next_id: usize,
    subscribers: Vec<Subscriber<T>>,
    last: Option<T>,
}

/// Keeps a subscription alive, dropping it unsubscribes.
pub struct EventBridge<T>
where
    T: PartialEq + Clone,
{
    id: usize,
    events: Events<T>,
}

impl<T: PartialEq + Clone> Deref for EventBridge<T> {
    type Target = Events<T>;

    fn deref(&self) -> &Self::Target {
        &self.events
    }
}

impl<T: PartialEq + Clone> Drop for EventBridge<T> {
    fn drop(&mut self) {
        self.events.unsubscribe(self.id);
    }
}

/// Broadcast bus handed down through a yew `ContextProvider`.
///
/// The most recent event is remembered and replayed to late subscribers, so a
/// component mounted mid page still learns the current state.
pub struct Events<T>
where
    T: PartialEq + Clone,
{
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: PartialEq + Clone> Clone for Events<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: PartialEq + Clone> PartialEq for Events<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: PartialEq + Clone> Default for Events<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                subscribers: Vec::new(),
                last: None,
            })),
        }
    }
}

#[must_use]
pub fn event_context<T: PartialEq + Clone + 'static, C: Component>(
    ctx: &Context<C>,
) -> Option<Events<T>> {
    let (events, _) = ctx.link().context::<Events<T>>(Callback::noop())?;

    Some(events)
}

impl<T: PartialEq + Clone> Events<T> {
    /// Sends `e` to every subscriber, repeated identical events are dropped.
    pub fn emit(&self, e: T) {
        let callbacks: Vec<Callback<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.last.as_ref() == Some(&e) {
                return;
            }
            inner.last = Some(e.clone());
            inner
                .subscribers
                .iter()
                .map(|s| s.callback.clone())
                .collect()
        };

        for callback in callbacks {
            callback.emit(e.clone());
        }
    }

    #[must_use]
    pub fn subscribe(&self, callback: Callback<T>) -> EventBridge<T> {
        let (id, last) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Subscriber {
                id,
                callback: callback.clone(),
            });
            (id, inner.last.clone())
        };

        if let Some(last) = last {
            callback.emit(last);
        }

        EventBridge {
            events: self.clone(),
            id,
        }
    }

    fn unsubscribe(&self, id: usize) {
        self.inner.borrow_mut().subscribers.retain(|s| s.id != id);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, Callback<u32>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = Rc::clone(&seen);
            Callback::from(move |v| seen.borrow_mut().push(v))
        };
        (seen, callback)
    }

    #[test]
    fn test_emit_reaches_subscribers() {
        let events = Events::<u32>::default();
        let (seen, callback) = recorder();
        let _bridge = events.subscribe(callback);

        events.emit(1);
        events.emit(2);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_repeated_event_is_dropped() {
        let events = Events::<u32>::default();
        let (seen, callback) = recorder();
        let _bridge = events.subscribe(callback);

        events.emit(7);
        events.emit(7);

        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn test_late_subscriber_gets_last() {
        let events = Events::<u32>::default();
        events.emit(3);

        let (seen, callback) = recorder();
        let _bridge = events.subscribe(callback);

        assert_eq!(*seen.borrow(), vec![3]);

        events.emit(4);
        assert_eq!(*seen.borrow(), vec![3, 4]);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let events = Events::<u32>::default();
        let hits = Rc::new(Cell::new(0));
        let bridge = {
            let hits = Rc::clone(&hits);
            events.subscribe(Callback::from(move |_| hits.set(hits.get() + 1)))
        };
        events.emit(1);
        assert_eq!(hits.get(), 1);

        drop(bridge);
        events.emit(2);

        assert_eq!(hits.get(), 1);
        assert!(events.inner.borrow().subscribers.is_empty());
    }
}
