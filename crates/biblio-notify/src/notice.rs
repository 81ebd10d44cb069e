use std::collections::VecDeque;

use biblio_core::session::DownloadSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
}

/// Bounded ring of recent notices, the backing store for the UI toast
/// line. Oldest entries fall off once the capacity is reached.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    cap: usize,
    next_seq: u64,
    buf: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            next_seq: 1,
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let notice = Notice {
            seq: self.next_seq,
            message: message.into(),
        };
        self.next_seq += 1;
        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(notice);
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.buf.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.buf.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl DownloadSink for NoticeBoard {
    fn download_requested(&mut self, code: &str, name: &str) {
        self.push(format!("{code}: {name} syllabus has been downloaded."));
    }
}
