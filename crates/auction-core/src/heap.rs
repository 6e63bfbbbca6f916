//! Indexed binary heap.
//!
//! The priority queue behind both sides of the order book. Compared to
//! `std::collections::BinaryHeap` it adds one capability: any resting
//! element can be replaced in place in O(log n). Elements are addressed
//! through an opaque [`Handle`] handed out at insertion; a handle →
//! position map is kept in sync across every swap, so an update finds its
//! slot without scanning the heap.
//!
//! Invariants:
//! - Heap property: no element outranks its parent under the effective
//!   ordering.
//! - Index bijection: `positions` maps every live handle to the slot that
//!   holds it, and nothing else.
//!
//! The effective ordering is the comparator first, insertion order second:
//! comparator ties are broken by handle, so equal-priority elements drain
//! first-in-first-out.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::mem;

use crate::error::QueueError;

/// Ordering policy for a queue.
///
/// `Ordering::Less` means `a` outranks `b`, i.e. `a` drains first.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Opaque handle for an inserted element.
///
/// Handles are allocated from a per-queue monotonic counter, so they double
/// as insertion sequence numbers: a smaller handle was inserted earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(u64);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Slot<T> {
    handle: Handle,
    value: T,
}

/// Binary min-heap with a handle → position index.
#[derive(Debug)]
pub struct IndexedHeap<T, C> {
    /// Densely packed heap; `slots[0]` is the highest-priority element.
    slots: Vec<Slot<T>>,
    /// Current position of every live handle.
    positions: HashMap<Handle, usize>,
    comparator: C,
    next_handle: u64,
}

impl<T, C> IndexedHeap<T, C>
where
    C: Comparator<T>,
{
    /// Create an empty queue with the given ordering policy.
    pub fn new(comparator: C) -> Self {
        IndexedHeap {
            slots: Vec::new(),
            positions: HashMap::new(),
            comparator,
            next_handle: 0,
        }
    }

    /// Number of resting elements.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Insert a value and return its handle. O(log n).
    ///
    /// Values of equal priority are legal; the handle keeps them apart.
    pub fn insert(&mut self, value: T) -> Handle {
        let handle = Handle(self.next_handle);
        self.next_handle += 1;

        let pos = self.slots.len();
        self.slots.push(Slot { handle, value });
        self.positions.insert(handle, pos);
        self.sift_up(pos);

        handle
    }

    /// The highest-priority element, without removing it. O(1).
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.slots
            .first()
            .map(|slot| &slot.value)
            .ok_or(QueueError::Empty)
    }

    /// Remove and return the highest-priority element. O(log n).
    ///
    /// The last slot moves into the root and is sifted down; the removed
    /// handle's index entry is cleared.
    pub fn extract_min(&mut self) -> Result<T, QueueError> {
        if self.slots.is_empty() {
            return Err(QueueError::Empty);
        }

        let root = self.slots.swap_remove(0);
        self.positions.remove(&root.handle);

        if let Some(moved) = self.slots.first() {
            self.positions.insert(moved.handle, 0);
            self.sift_down(0);
        }

        Ok(root.value)
    }

    /// Replace the value held under `handle`, keeping the handle (and with
    /// it the element's insertion priority). Returns the previous value.
    /// O(log n).
    ///
    /// The heap is repaired in the direction the comparator dictates:
    /// sift-up when the replacement outranks the old value, sift-down when
    /// it is outranked, nothing on a tie.
    pub fn update(&mut self, handle: Handle, value: T) -> Result<T, QueueError> {
        let pos = *self
            .positions
            .get(&handle)
            .ok_or(QueueError::UnknownHandle(handle))?;

        let old = mem::replace(&mut self.slots[pos].value, value);

        match self.comparator.compare(&self.slots[pos].value, &old) {
            Ordering::Less => self.sift_up(pos),
            Ordering::Greater => self.sift_down(pos),
            Ordering::Equal => {}
        }

        Ok(old)
    }

    /// All resting elements, in unspecified (heap) order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> + '_ {
        self.slots.iter().map(|slot| (slot.handle, &slot.value))
    }

    // -------------------------------------------------------------------------
    // Heap repair
    // -------------------------------------------------------------------------

    /// Does the element at `a` outrank the element at `b`?
    ///
    /// Comparator ties fall back to the handle: earlier insertion wins.
    fn outranks(&self, a: usize, b: usize) -> bool {
        let (sa, sb) = (&self.slots[a], &self.slots[b]);
        match self.comparator.compare(&sa.value, &sb.value) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => sa.handle < sb.handle,
        }
    }

    /// Swap two slots and re-point both index entries.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.positions.insert(self.slots[a].handle, a);
        self.positions.insert(self.slots[b].handle, b);
    }

    /// Move the element at `pos` towards the root while it outranks its
    /// parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.outranks(pos, parent) {
                self.swap_slots(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `pos` towards the leaves, swapping with its
    /// higher-priority child (left on a tie) while that child outranks it.
    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= self.slots.len() {
                break;
            }

            let right = left + 1;
            let mut child = left;
            if right < self.slots.len() && self.outranks(right, left) {
                child = right;
            }

            if self.outranks(child, pos) {
                self.swap_slots(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}
