//! Links that arrived before anyone was listening.
//!
//! A second app instance or an early OS activation can hand over links before
//! the UI has subscribed. They are parked here until the UI drains them.

use std::sync::Mutex;

use super::argv::is_valid_external_link;

/// Maximum number of parked links; the oldest are dropped beyond this.
pub const MAX_PENDING_EXTERNAL_LINKS: usize = 100;

/// Bounded, de-duplicated queue of raw deep links.
#[derive(Debug)]
pub struct PendingLinks {
    links: Mutex<Vec<String>>,
    capacity: usize,
}

impl Default for PendingLinks {
    fn default() -> Self {
        Self::with_capacity(MAX_PENDING_EXTERNAL_LINKS)
    }
}

impl PendingLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    /// Parks every well-shaped link not already queued. Returns how many were added.
    pub fn enqueue<I, S>(&self, links: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Ok(mut pending) = self.links.lock() else {
            tracing::warn!("pending link queue poisoned; dropping links");
            return 0;
        };
        let mut added = 0;
        for link in links {
            let link = link.into();
            if !is_valid_external_link(&link) || pending.contains(&link) {
                continue;
            }
            pending.push(link);
            added += 1;
            if pending.len() > self.capacity {
                let overflow = pending.len() - self.capacity;
                pending.drain(..overflow);
            }
        }
        added
    }

    /// Drains and returns all parked links, oldest first.
    pub fn take(&self) -> Vec<String> {
        match self.links.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.links.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
