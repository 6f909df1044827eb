//! History session
//!
//! Pairs a back stack and a forward stack of the same capacity:
//! ```text
//! back:    [oldest ... previous, current]
//! forward: [... next]
//!   Backward: back.top  → forward
//!   Forward:  forward.top → back
//! ```

use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::NavigationError;
use crate::stack::NavigationStack;
use crate::Result;

/// What happens when the destination stack of a move is already full
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovePolicy {
    /// Pop the source anyway; the page is lost if the destination rejects it
    #[default]
    Lossy,
    /// Refuse the move up front and leave both stacks untouched
    Transactional,
}

impl MovePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovePolicy::Lossy => "lossy",
            MovePolicy::Transactional => "transactional",
        }
    }
}

impl std::fmt::Display for MovePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MovePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lossy" => Ok(MovePolicy::Lossy),
            "transactional" => Ok(MovePolicy::Transactional),
            _ => Err(format!("Unknown move policy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Back,
    Forward,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Back => write!(f, "back"),
            Side::Forward => write!(f, "forward"),
        }
    }
}

/// Pages around the current one after a successful move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Direction of the move
    pub command: Command,
    /// The page that changed stacks
    pub moved: String,
    pub current: Option<String>,
    pub next: Option<String>,
    pub previous: Option<String>,
    /// Lossy counterpart of `ForwardFull`/`BackFull`: the side that rejected
    /// `moved`, which is then lost from both stacks
    pub dropped: Option<Side>,
}

#[derive(Debug, Clone)]
pub struct HistorySession {
    back: NavigationStack,
    forward: NavigationStack,
    policy: MovePolicy,
}

impl HistorySession {
    pub fn new(capacity: usize) -> Self {
        Self::with_policy(capacity, MovePolicy::default())
    }

    pub fn with_policy(capacity: usize, policy: MovePolicy) -> Self {
        Self {
            back: NavigationStack::new(capacity),
            forward: NavigationStack::new(capacity),
            policy,
        }
    }

    /// Record a visited page while loading history
    pub fn visit(&mut self, url: impl Into<String>) -> Result<()> {
        self.back.push(url)
    }

    pub fn go_backward(&mut self) -> Result<Transition> {
        if self.back.previous().is_none() {
            return Err(NavigationError::AtOldest);
        }

        if self.policy == MovePolicy::Transactional && self.forward.is_full() {
            let url = self.back.current().unwrap_or_default().to_string();
            tracing::warn!(%url, "Forward history full, backward move refused");
            return Err(NavigationError::ForwardFull { url });
        }

        let moved = self.back.pop().ok_or(NavigationError::AtOldest)?;
        let dropped = Self::transfer(&mut self.forward, &moved, Side::Forward);

        tracing::debug!(url = %moved, "Moved page backward");

        Ok(Transition {
            command: Command::Backward,
            current: self.back.current().map(str::to_string),
            next: Some(moved.clone()),
            previous: self.back.previous().map(str::to_string),
            moved,
            dropped,
        })
    }

    pub fn go_forward(&mut self) -> Result<Transition> {
        if self.forward.is_empty() {
            return Err(NavigationError::NoForwardHistory);
        }

        if self.policy == MovePolicy::Transactional && self.back.is_full() {
            let url = self.forward.current().unwrap_or_default().to_string();
            tracing::warn!(%url, "Back history full, forward move refused");
            return Err(NavigationError::BackFull { url });
        }

        let moved = self
            .forward
            .pop()
            .ok_or(NavigationError::NoForwardHistory)?;
        let dropped = Self::transfer(&mut self.back, &moved, Side::Back);

        tracing::debug!(url = %moved, "Moved page forward");

        Ok(Transition {
            command: Command::Forward,
            current: Some(moved.clone()),
            next: self.forward.current().map(str::to_string),
            previous: self.back.previous().map(str::to_string),
            moved,
            dropped,
        })
    }

    /// Push a popped page onto its destination, reporting the side that lost it
    fn transfer(destination: &mut NavigationStack, url: &str, side: Side) -> Option<Side> {
        match destination.push(url) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(%url, %side, "Page dropped: {}", e);
                Some(side)
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.back.current()
    }

    pub fn previous(&self) -> Option<&str> {
        self.back.previous()
    }

    /// The page a `Forward` command would lead to
    pub fn next(&self) -> Option<&str> {
        self.forward.current()
    }

    pub fn back(&self) -> &NavigationStack {
        &self.back
    }

    pub fn forward(&self) -> &NavigationStack {
        &self.forward
    }

    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    pub fn capacity(&self) -> usize {
        self.back.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_of(capacity: usize, urls: &[&str], policy: MovePolicy) -> HistorySession {
        let mut session = HistorySession::with_policy(capacity, policy);
        for url in urls {
            session.visit(*url).unwrap();
        }
        session
    }

    fn snapshot(session: &HistorySession) -> (Vec<String>, Vec<String>) {
        (
            session.back().iter().map(str::to_string).collect(),
            session.forward().iter().map(str::to_string).collect(),
        )
    }

    /// back = [a, d], forward = [b, c]: both stacks at capacity 2
    fn session_with_full_forward(policy: MovePolicy) -> HistorySession {
        let mut session = session_of(2, &["a", "b"], policy);
        session.go_backward().unwrap();
        session.visit("c").unwrap();
        session.go_backward().unwrap();
        session.visit("d").unwrap();
        assert!(session.forward().is_full());
        session
    }

    #[test]
    fn test_backward_backward_forward() {
        let mut session = session_of(10, &["a", "b", "c"], MovePolicy::Lossy);

        let step = session.go_backward().unwrap();
        assert_eq!(step.current.as_deref(), Some("b"));
        assert_eq!(step.next.as_deref(), Some("c"));
        assert_eq!(step.previous.as_deref(), Some("a"));

        let step = session.go_backward().unwrap();
        assert_eq!(step.current.as_deref(), Some("a"));
        assert_eq!(step.next.as_deref(), Some("b"));
        assert_eq!(step.previous, None);

        let step = session.go_forward().unwrap();
        assert_eq!(step.current.as_deref(), Some("b"));
        assert_eq!(step.next.as_deref(), Some("c"));
        assert_eq!(step.previous.as_deref(), Some("a"));
        assert_eq!(step.dropped, None);
        assert_eq!(step.command, Command::Forward);

        assert_eq!(session.current(), Some("b"));
        assert_eq!(session.next(), Some("c"));
    }

    #[test]
    fn test_backward_at_oldest_page() {
        let mut session = session_of(1, &["x"], MovePolicy::Lossy);
        let before = snapshot(&session);

        assert_eq!(session.go_backward(), Err(NavigationError::AtOldest));
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn test_backward_on_empty_session() {
        let mut session = HistorySession::new(3);
        assert_eq!(session.go_backward(), Err(NavigationError::AtOldest));
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_forward_without_forward_history() {
        let mut session = session_of(3, &["a", "b"], MovePolicy::Lossy);
        let before = snapshot(&session);

        assert_eq!(session.go_forward(), Err(NavigationError::NoForwardHistory));
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn test_backward_then_forward_restores_current() {
        let mut session = session_of(5, &["a", "b", "c", "d"], MovePolicy::Lossy);
        let before = session.current().map(str::to_string);

        session.go_backward().unwrap();
        session.go_forward().unwrap();

        assert_eq!(session.current().map(str::to_string), before);
        assert!(session.forward().is_empty());
        assert_eq!(session.back().len(), 4);
    }

    #[test]
    fn test_visit_rejects_past_capacity() {
        let mut session = HistorySession::new(2);
        session.visit("a").unwrap();
        session.visit("b").unwrap();
        assert_eq!(
            session.visit("c"),
            Err(NavigationError::StackFull { capacity: 2 })
        );
        assert_eq!(session.current(), Some("b"));
    }

    #[test]
    fn test_lossy_forward_drops_page_when_back_is_full() {
        let mut session = session_of(2, &["a", "b"], MovePolicy::Lossy);
        session.go_backward().unwrap();
        // Refill the back stack so the returning page has nowhere to go.
        session.visit("c").unwrap();

        let step = session.go_forward().unwrap();
        assert_eq!(step.moved, "b");
        assert_eq!(step.current.as_deref(), Some("b"));
        assert_eq!(step.next, None);
        assert_eq!(step.previous.as_deref(), Some("a"));
        assert_eq!(step.dropped, Some(Side::Back));

        let (back, forward) = snapshot(&session);
        assert_eq!(back, vec!["c", "a"]);
        assert!(forward.is_empty());
    }

    #[test]
    fn test_transactional_forward_refuses_when_back_is_full() {
        let mut session = session_of(2, &["a", "b"], MovePolicy::Transactional);
        session.go_backward().unwrap();
        session.visit("c").unwrap();
        let before = snapshot(&session);

        assert_eq!(
            session.go_forward(),
            Err(NavigationError::BackFull {
                url: "b".to_string()
            })
        );
        assert_eq!(snapshot(&session), before);
    }

    #[test]
    fn test_lossy_backward_drops_page_when_forward_is_full() {
        let mut session = session_with_full_forward(MovePolicy::Lossy);

        let step = session.go_backward().unwrap();
        assert_eq!(step.command, Command::Backward);
        assert_eq!(step.moved, "d");
        assert_eq!(step.current.as_deref(), Some("a"));
        assert_eq!(step.next.as_deref(), Some("d"));
        assert_eq!(step.previous, None);
        assert_eq!(step.dropped, Some(Side::Forward));

        let (back, forward) = snapshot(&session);
        assert_eq!(back, vec!["a"]);
        assert_eq!(forward, vec!["c", "b"]);
    }

    #[test]
    fn test_transactional_backward_refuses_when_forward_is_full() {
        let mut session = session_with_full_forward(MovePolicy::Transactional);
        let before = snapshot(&session);

        assert_eq!(
            session.go_backward(),
            Err(NavigationError::ForwardFull {
                url: "d".to_string()
            })
        );
        assert_eq!(snapshot(&session), before);
        assert_eq!(before.0, vec!["d", "a"]);
        assert_eq!(before.1, vec!["c", "b"]);
    }

    #[test]
    fn test_capacity_is_shared() {
        let session = HistorySession::new(7);
        assert_eq!(session.capacity(), 7);
        assert_eq!(session.back().capacity(), session.forward().capacity());
    }

    #[test]
    fn test_transactional_backward_never_loses_pages() {
        let mut session = session_of(3, &["a", "b", "c"], MovePolicy::Transactional);
        let mut seen = 0;
        while session.go_backward().is_ok() {
            seen += 1;
        }
        assert_eq!(seen, 2);
        assert_eq!(session.back().len() + session.forward().len(), 3);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("lossy".parse::<MovePolicy>(), Ok(MovePolicy::Lossy));
        assert_eq!(
            "Transactional".parse::<MovePolicy>(),
            Ok(MovePolicy::Transactional)
        );
        assert!("strict".parse::<MovePolicy>().is_err());
    }
}
