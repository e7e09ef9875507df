use std::rc::Rc;

/// Identifies one issued request. Later tickets supersede earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out monotonically increasing tickets.
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

/// Load state of one independently fetched source.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Idle,
    Loading(Ticket),
    Ready(Rc<T>),
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Idle
    }
}

impl<T> Loadable<T> {
    pub fn start(&mut self, ticket: Ticket) {
        *self = Loadable::Loading(ticket);
    }

    /// Applies a finished request. Returns `false` and leaves the state alone
    /// when `ticket` is not the request currently awaited.
    pub fn finish<E: ToString>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        match self {
            Loadable::Loading(current) if *current == ticket => {
                *self = match result {
                    Ok(value) => Loadable::Ready(Rc::new(value)),
                    Err(e) => Loadable::Failed(e.to_string()),
                };
                true
            }
            _ => false,
        }
    }

    /// Whether a fetch should be started: nothing loaded yet or the last one failed.
    pub fn needs_fetch(&self) -> bool {
        matches!(self, Loadable::Idle | Loadable::Failed(_))
    }

    pub fn ready(&self) -> Option<&Rc<T>> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut counter = TicketCounter::default();
        let first = counter.issue();
        let second = counter.issue();
        assert!(second > first);
    }

    #[test]
    fn only_the_awaited_ticket_is_applied() {
        let mut counter = TicketCounter::default();
        let mut albums: Loadable<Vec<&str>> = Loadable::default();

        let stale = counter.issue();
        albums.start(stale);
        let fresh = counter.issue();
        albums.start(fresh);

        assert!(!albums.finish::<String>(stale, Ok(vec!["old"])));
        assert_eq!(albums, Loadable::Loading(fresh));

        assert!(albums.finish::<String>(fresh, Ok(vec!["new"])));
        assert_eq!(albums.ready().map(|a| a.as_slice()), Some(&["new"][..]));

        // A late duplicate does not overwrite ready content.
        assert!(!albums.finish::<String>(fresh, Err("boom".to_string())));
        assert!(albums.ready().is_some());
    }

    #[test]
    fn failure_is_recorded_and_can_be_retried() {
        let mut counter = TicketCounter::default();
        let mut videos: Loadable<Vec<u8>> = Loadable::default();
        assert!(videos.needs_fetch());

        let ticket = counter.issue();
        videos.start(ticket);
        assert!(!videos.needs_fetch());
        videos.finish(ticket, Err("offline"));

        assert_eq!(videos, Loadable::Failed("offline".to_string()));
        assert!(videos.needs_fetch());
    }
}
