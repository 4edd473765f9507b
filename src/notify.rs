use std::{collections::VecDeque, time::Duration};

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Toasts currently on screen, oldest first. Pushing past the limit drops
/// the oldest.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    entries: VecDeque<(ToastId, Toast)>,
    next_id: ToastId,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, toast: Toast) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back((id, toast));
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        id
    }

    /// Returns false if `id` was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(i, _)| *i != id);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ToastId, Toast)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Toast::new("a", ""));
        let b = queue.push(Toast::new("b", ""));
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut queue = ToastQueue::with_limit(2);
        let first = queue.push(Toast::new("first", ""));
        queue.push(Toast::new("second", ""));
        queue.push(Toast::destructive("third", "boom"));

        let titles = queue.iter().map(|(_, t)| t.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["second", "third"]);
        assert!(!queue.dismiss(first));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push(Toast::new("hello", "world"));
        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn test_destructive_kind() {
        let toast = Toast::destructive("Failed", "Server unavailable");
        assert_eq!(toast.kind, ToastKind::Destructive);
        assert_eq!(Toast::new("Ok", "").kind, ToastKind::Default);
    }
}
