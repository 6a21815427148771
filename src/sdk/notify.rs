use std::sync::mpsc::{self, Receiver, Sender};

/// Visual weight of a notice, mirroring the frontend's toast variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Destructive,
}

/// A transient, user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: &str, description: &str) -> Self {
        Self {
            level,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self::new(NoticeLevel::Destructive, title, description)
    }
}

/// Cloneable sender half for raising notices from background workers. The
/// UI drains the matching receiver; a notice sent after the receiver is
/// gone is silently dropped.
#[derive(Clone)]
pub struct Notifier {
    tx: Sender<Notice>,
}

impl Notifier {
    pub fn channel() -> (Notifier, Receiver<Notice>) {
        let (tx, rx) = mpsc::channel();
        (Notifier { tx }, rx)
    }

    pub fn notify(&self, notice: Notice) {
        let _ = self.tx.send(notice);
    }
}
