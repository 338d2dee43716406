//! Search progress notifications.
//!
//! The engine reports what it does through a [`SearchObserver`] instead of
//! drawing anything itself. A renderer can reveal a frontier marker on
//! [`SearchEvent::NodeExpanded`], fade it on [`SearchEvent::NodeClosed`] and
//! walk the agent along the path carried by [`SearchEvent::SearchFound`].

use mazestar_core::Location;

/// Something the engine did during a [`step`](crate::SearchEngine::step).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A frontier node was created or had its costs replaced.
    NodeExpanded {
        location: Location,
        g: f64,
        h: f64,
        f: f64,
    },
    /// A node moved from open to closed. Not emitted for the start or goal
    /// location.
    NodeClosed(Location),
    /// The goal was reached. Carries the path, start excluded.
    SearchFound(Vec<Location>),
    /// The frontier ran dry, no path exists.
    SearchExhausted,
}

/// Receives [`SearchEvent`]s. Purely informational.
pub trait SearchObserver {
    fn on_event(&mut self, event: &SearchEvent);
}

/// The no-op observer.
impl SearchObserver for () {
    #[inline]
    fn on_event(&mut self, _event: &SearchEvent) {}
}

impl<F: FnMut(&SearchEvent)> SearchObserver for F {
    #[inline]
    fn on_event(&mut self, event: &SearchEvent) {
        self(event)
    }
}

/// Observer that records every event it sees.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<SearchEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Remove and return all recorded events.
    pub fn drain(&mut self) -> Vec<SearchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded [`SearchEvent::NodeExpanded`] events.
    pub fn expanded_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SearchEvent::NodeExpanded { .. }))
            .count()
    }

    /// Locations of recorded [`SearchEvent::NodeClosed`] events, in order.
    pub fn closed_locations(&self) -> Vec<Location> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::NodeClosed(loc) => Some(*loc),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for EventLog {
    fn on_event(&mut self, event: &SearchEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(&SearchEvent::NodeClosed(Location::new(1, 1)));
        log.on_event(&SearchEvent::NodeExpanded {
            location: Location::new(2, 1),
            g: 1.0,
            h: 1.0,
            f: 2.0,
        });
        log.on_event(&SearchEvent::SearchExhausted);
        assert_eq!(log.events().len(), 3);
        assert_eq!(log.expanded_count(), 1);
        assert_eq!(log.closed_locations(), vec![Location::new(1, 1)]);
        assert_eq!(log.drain().len(), 3);
        assert!(log.events().is_empty());
    }

    #[test]
    fn closures_observe() {
        let mut seen = 0;
        {
            let mut obs = |_: &SearchEvent| seen += 1;
            obs.on_event(&SearchEvent::SearchExhausted);
            obs.on_event(&SearchEvent::SearchExhausted);
        }
        assert_eq!(seen, 2);
    }
}
