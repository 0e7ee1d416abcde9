/// Token returned when an idle callback is added.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

/// What an idle callback wants after it ran.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IdleControl {
    /// Run again at the next idle dispatch.
    Continue,
    /// Drop the callback.
    Remove,
}

impl From<bool> for IdleControl {
    /// `true` keeps the callback, `false` removes it.
    fn from(keep: bool) -> Self {
        if keep { IdleControl::Continue } else { IdleControl::Remove }
    }
}

type IdleFn<S> = Box<dyn FnMut(&mut S) -> IdleControl>;

struct IdleEntry<S> {
    id: SourceId,
    callback: IdleFn<S>,
}

/// Callbacks invoked when the loop has nothing more urgent to do.
///
/// Callbacks receive the loop state `S` by `&mut`. Each dispatch runs every
/// registered callback once, in registration order. The queue is borrowed
/// for the whole dispatch, so a callback can never re-enter it; sources
/// added between dispatches run at the next one.
pub struct IdleQueue<S> {
    entries: Vec<IdleEntry<S>>,
    next_id: u64,
}

impl<S> IdleQueue<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers `callback`; it runs at the next dispatch.
    pub fn add<F>(&mut self, callback: F) -> SourceId
    where
        F: FnMut(&mut S) -> IdleControl + 'static,
    {
        let id = SourceId(self.next_id);
        self.next_id += 1;

        self.entries.push(IdleEntry {
            id,
            callback: Box::new(callback),
        });

        log::trace!("idle source {id:?} added");
        id
    }

    /// Removes a callback before it runs again. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: SourceId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    pub fn contains(&self, id: SourceId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs every callback once and drops those returning `Remove`.
    ///
    /// Returns the number of callbacks that ran.
    pub fn dispatch(&mut self, state: &mut S) -> usize {
        let ran = self.entries.len();

        self.entries.retain_mut(|entry| {
            let keep = (entry.callback)(state) == IdleControl::Continue;
            if !keep {
                log::trace!("idle source {:?} removed", entry.id);
            }
            keep
        });

        ran
    }
}

impl<S> Default for IdleQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        hits: Vec<&'static str>,
    }

    #[test]
    fn one_shot_runs_once() {
        let mut idle = IdleQueue::new();
        let mut state = Counter::default();

        idle.add(|s: &mut Counter| {
            s.hits.push("once");
            IdleControl::Remove
        });

        assert_eq!(idle.dispatch(&mut state), 1);
        assert_eq!(idle.dispatch(&mut state), 0);
        assert_eq!(state.hits, ["once"]);
        assert!(idle.is_empty());
    }

    #[test]
    fn continue_keeps_running_every_dispatch() {
        let mut idle = IdleQueue::new();
        let mut state = Counter::default();

        let id = idle.add(|s: &mut Counter| {
            s.hits.push("again");
            IdleControl::Continue
        });

        for _ in 0..5 {
            idle.dispatch(&mut state);
        }

        assert_eq!(state.hits.len(), 5);
        assert!(idle.contains(id));
    }

    #[test]
    fn dispatch_preserves_registration_order() {
        let mut idle = IdleQueue::new();
        let mut state = Counter::default();

        idle.add(|s: &mut Counter| {
            s.hits.push("a");
            IdleControl::Remove
        });
        idle.add(|s: &mut Counter| {
            s.hits.push("b");
            IdleControl::Remove
        });

        idle.dispatch(&mut state);
        assert_eq!(state.hits, ["a", "b"]);
    }

    #[test]
    fn removed_source_never_runs() {
        let mut idle = IdleQueue::new();
        let mut state = Counter::default();

        let id = idle.add(|s: &mut Counter| {
            s.hits.push("x");
            IdleControl::Continue
        });

        assert!(idle.remove(id));
        assert!(!idle.remove(id));
        idle.dispatch(&mut state);
        assert!(state.hits.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let mut idle: IdleQueue<Counter> = IdleQueue::new();
        let a = idle.add(|_| IdleControl::Remove);
        let b = idle.add(|_| IdleControl::Remove);
        assert_ne!(a, b);
    }

    #[test]
    fn bool_maps_to_control() {
        assert_eq!(IdleControl::from(true), IdleControl::Continue);
        assert_eq!(IdleControl::from(false), IdleControl::Remove);
    }
}
