//! `RequestQueue` — FIFO holding pen for one direction of service requests.
//!
//! The building keeps one queue per direction and never hands out the
//! underlying storage: the only ways in and out are [`enqueue`],
//! [`drain_front`], and [`clear`], which keeps every aliasing question inside
//! this module.
//!
//! [`enqueue`]: RequestQueue::enqueue
//! [`drain_front`]: RequestQueue::drain_front
//! [`clear`]: RequestQueue::clear

use std::collections::VecDeque;

use lift_core::Request;

/// An insertion-ordered queue of pending requests.
#[derive(Clone, Debug, Default)]
pub struct RequestQueue {
    inner: VecDeque<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request at the back.
    pub fn enqueue(&mut self, request: Request) {
        self.inner.push_back(request);
    }

    /// Remove and return up to `max` requests from the front.
    ///
    /// This is the allocation primitive: once drained, requests belong to
    /// the receiving cab and are never re-queued.
    pub fn drain_front(&mut self, max: usize) -> Vec<Request> {
        let take = max.min(self.inner.len());
        self.inner.drain(..take).collect()
    }

    /// Discard every pending request.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Value copy of the pending requests, front first.
    pub fn snapshot(&self) -> Vec<Request> {
        self.inner.iter().copied().collect()
    }
}
