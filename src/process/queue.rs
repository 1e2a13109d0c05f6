/*!
 * Ready Queue
 * Binary max-heap of process handles ordered by effective priority
 */

use super::table::ProcessTable;
use super::types::ProcessState;
use crate::core::types::{Pid, Priority, STALE_PRIORITY};
use log::{debug, trace};

const INITIAL_CAPACITY: usize = 16;

/// Priority max-heap over records owned by the process table.
///
/// Entries are pids; comparisons resolve each pid through the table at
/// comparison time, so the heap always orders by the record's *current*
/// effective priority. A pid whose record is gone or not `Ready` ranks at
/// [`STALE_PRIORITY`], below every valid value, and therefore sinks to a
/// leaf and is dequeued last.
///
/// Backing storage starts at 16 entries and doubles when full; it never
/// shrinks.
///
/// Ties between equal effective priorities resolve in whatever order the
/// sift operations happen to compare the entries. No insertion-order
/// (FIFO) guarantee exists among equal priorities.
pub struct ReadyQueue {
    heap: Vec<Pid>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            heap: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Current count of live entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Effective priority of a handle: the record's clamped priority when
    /// it is live and `Ready`, otherwise [`STALE_PRIORITY`]
    fn effective_priority(table: &ProcessTable, pid: Pid) -> Priority {
        match table.get(pid) {
            Some(record) if record.state() == ProcessState::Ready => record.effective_priority(),
            _ => STALE_PRIORITY,
        }
    }

    /// Add a process to the ready queue, forcing its state to `Ready`.
    ///
    /// A handle that resolves to no record is ignored; the queue never
    /// fails on a bad handle.
    pub fn enqueue(&mut self, table: &mut ProcessTable, pid: Pid) {
        match table.get_mut(pid) {
            Some(record) => record.set_state(ProcessState::Ready),
            None => {
                debug!("Ignoring enqueue of unknown handle {}", pid);
                return;
            }
        }

        self.heap.push(pid);
        self.sift_up(table, self.heap.len() - 1);
        trace!("Process {} enqueued ({} ready)", pid, self.heap.len());
    }

    /// Remove and return the handle with the highest effective priority,
    /// forcing the record's state to `Running`.
    ///
    /// Returns `None` when the queue is empty.
    pub fn dequeue_max(&mut self, table: &mut ProcessTable) -> Option<Pid> {
        if self.heap.is_empty() {
            return None;
        }

        // Root out, last element to the root, then restore heap order
        let top = self.heap.swap_remove(0);
        Self::sift_down(table, &mut self.heap, 0);

        if let Some(record) = table.get_mut(top) {
            record.set_state(ProcessState::Running);
        }

        trace!("Process {} dequeued ({} ready)", top, self.heap.len());
        Some(top)
    }

    /// Non-destructive listing of all contained handles from highest to
    /// lowest effective priority.
    ///
    /// Operates on a copy of the live entries; the real heap's state and
    /// order are unaffected.
    pub fn peek_all_descending(&self, table: &ProcessTable) -> Vec<Pid> {
        let mut copy = self.heap.clone();
        let mut ordered = Vec::with_capacity(copy.len());

        while !copy.is_empty() {
            ordered.push(copy.swap_remove(0));
            Self::sift_down(table, &mut copy, 0);
        }

        ordered
    }

    /// Swap the element at `idx` with its parent while it outranks it
    fn sift_up(&mut self, table: &ProcessTable, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            let child_priority = Self::effective_priority(table, self.heap[idx]);
            let parent_priority = Self::effective_priority(table, self.heap[parent]);

            if child_priority > parent_priority {
                self.heap.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Swap the element at `idx` toward the leaves while a child outranks it
    fn sift_down(table: &ProcessTable, heap: &mut [Pid], mut idx: usize) {
        loop {
            let left = idx * 2 + 1;
            let right = idx * 2 + 2;
            let mut largest = idx;

            if left < heap.len()
                && Self::effective_priority(table, heap[left])
                    > Self::effective_priority(table, heap[largest])
            {
                largest = left;
            }
            if right < heap.len()
                && Self::effective_priority(table, heap[right])
                    > Self::effective_priority(table, heap[largest])
            {
                largest = right;
            }

            if largest == idx {
                break;
            }
            heap.swap(idx, largest);
            idx = largest;
        }
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}
