/*!
 * Process Table
 * Exclusive owner of all process control blocks, indexed by pid
 */

use super::pcb::ProcessControlBlock;
use crate::core::types::Pid;
use log::debug;

/// Fixed-capacity table of owned process records.
///
/// The table is the single source of truth for process existence and
/// data. Capacity is fixed at construction (minimum 1). Every other
/// component holds pids, never records; a slot's occupant is dropped when
/// the slot is overwritten or the table itself is dropped.
pub struct ProcessTable {
    slots: Vec<Option<ProcessControlBlock>>,
}

impl ProcessTable {
    /// Create a table with `capacity` slots; capacity below 1 is coerced to 1
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// `None` on an out-of-bounds index or an empty slot; never panics
    pub fn get(&self, pid: Pid) -> Option<&ProcessControlBlock> {
        self.slots.get(pid as usize).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut ProcessControlBlock> {
        self.slots
            .get_mut(pid as usize)
            .and_then(|slot| slot.as_mut())
    }

    /// Store `pcb` at slot `pid`, dropping any prior occupant.
    ///
    /// An out-of-bounds index silently drops the record instead of
    /// failing; the simulation loop never aborts on a bad handle.
    /// Overwriting a slot whose pid is still live in the ready queue is
    /// forbidden; the queue treats handles to replaced records as stale
    /// and ranks them below every valid priority.
    pub fn put(&mut self, pcb: ProcessControlBlock, pid: Pid) {
        match self.slots.get_mut(pid as usize) {
            Some(slot) => *slot = Some(pcb),
            None => debug!(
                "Discarding record {} aimed at out-of-range slot {}",
                pcb.pid(),
                pid
            ),
        }
    }

    /// Iterate occupied slots in index order
    pub fn iter(&self) -> impl Iterator<Item = &ProcessControlBlock> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}
