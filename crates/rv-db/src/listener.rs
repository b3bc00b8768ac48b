//! Change notification for table model consumers

/// Receives notifications when a table model changes
pub trait TableModelListener {
    /// The number, names or types of columns may have changed, along
    /// with every row. Consumers should re-read the whole model.
    fn table_structure_changed(&self);
}

impl<F: Fn()> TableModelListener for F {
    fn table_structure_changed(&self) {
        self()
    }
}

/// Handle returned when registering a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registered listeners, notified in registration order
#[derive(Default)]
pub struct ListenerList {
    listeners: Vec<(ListenerId, Box<dyn TableModelListener>)>,
    next_id: u64,
}

impl ListenerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn add(&mut self, listener: Box<dyn TableModelListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener; returns whether it was registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Notify every listener that the table structure changed
    pub fn fire_structure_changed(&self) {
        for (_, listener) in &self.listeners {
            listener.table_structure_changed();
        }
    }
}

#[cfg(test)]
#[path = "listener_test.rs"]
mod tests;
