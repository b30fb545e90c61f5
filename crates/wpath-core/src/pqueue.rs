use ahash::AHashMap;

use crate::node::NodeId;

/// Source of the priority the heap orders nodes by. Smaller priorities are extracted first.
///
/// Priorities live outside the heap so the caller can change them between heap operations.
/// Whenever a queued node's priority decreases, the caller must report it through
/// [`IndexedMinHeap::decrease_priority`] before the next heap operation.
pub trait Priority {
    /// Current priority of `id`.
    fn priority(&self, id: NodeId) -> f64;
}

/// Binary min-heap of node ids that tracks the position of every queued node.
///
/// The position map makes [`contains`](Self::contains) O(1) and lets
/// [`decrease_priority`](Self::decrease_priority) reorder a node in place in O(log n).
#[derive(Clone, Debug, Default)]
pub struct IndexedMinHeap {
    heap: Vec<NodeId>,
    // Inverse of `heap`: every queued id maps to its slot, and nothing else is present.
    position: AHashMap<NodeId, usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            position: AHashMap::with_capacity(capacity),
        }
    }

    /// Builds a heap from an arbitrary sequence of distinct node ids in O(n).
    pub fn build<K: Priority + ?Sized>(
        initial: impl IntoIterator<Item = NodeId>,
        keys: &K,
    ) -> Self {
        let heap: Vec<NodeId> = initial.into_iter().collect();
        let mut this = IndexedMinHeap {
            position: AHashMap::with_capacity(heap.len()),
            heap,
        };

        if this.heap.len() > 1 {
            let last_parent = (this.heap.len() - 2) / 2;
            for index in (0..=last_parent).rev() {
                this.sift_down(index, keys);
            }
        }

        this.position.clear();
        this.position
            .extend(this.heap.iter().enumerate().map(|(index, &id)| (id, index)));
        debug_assert_eq!(this.position.len(), this.heap.len(), "duplicate node ids");
        this
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no nodes are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `id` is currently queued.
    pub fn contains(&self, id: NodeId) -> bool {
        self.position.contains_key(&id)
    }

    /// The node with the smallest priority, without removing it.
    pub fn peek(&self) -> Option<NodeId> {
        self.heap.first().copied()
    }

    /// Queues a node that is not already queued.
    pub fn insert<K: Priority + ?Sized>(&mut self, id: NodeId, keys: &K) {
        debug_assert!(!self.contains(id), "node {id} is already queued");
        self.heap.push(id);
        self.position.insert(id, self.heap.len() - 1);
        self.sift_up(self.heap.len() - 1, keys);
    }

    /// Removes and returns the node with the smallest priority, or `None` if the heap is empty.
    pub fn extract_min<K: Priority + ?Sized>(&mut self, keys: &K) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }

        self.swap_slots(0, self.heap.len() - 1);
        let min = self.heap.pop()?;
        self.position.remove(&min);
        if !self.heap.is_empty() {
            self.sift_down(0, keys);
        }
        Some(min)
    }

    /// Restores heap order after the priority of a queued node was lowered.
    ///
    /// Only decreases are supported: the node is only ever moved towards the root.
    pub fn decrease_priority<K: Priority + ?Sized>(&mut self, id: NodeId, keys: &K) {
        debug_assert!(self.contains(id), "node {id} is not queued");
        if let Some(&index) = self.position.get(&id) {
            self.sift_up(index, keys);
        }
    }

    /// Checks the heap property and that the position map is the exact inverse of the heap.
    pub fn is_valid<K: Priority + ?Sized>(&self, keys: &K) -> bool {
        let ordered = (1..self.heap.len()).all(|index| {
            let parent = self.heap[(index - 1) / 2];
            keys.priority(parent) <= keys.priority(self.heap[index])
        });
        let indexed = self.position.len() == self.heap.len()
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(index, id)| self.position.get(id) == Some(&index));
        ordered && indexed
    }

    fn sift_up<K: Priority + ?Sized>(&mut self, mut index: usize, keys: &K) {
        let node = self.heap[index];
        let priority = keys.priority(node);
        while index > 0 {
            let parent_index = (index - 1) / 2;
            let parent = self.heap[parent_index];
            if keys.priority(parent) <= priority {
                break;
            }
            self.set_slot(index, parent);
            index = parent_index;
        }
        self.set_slot(index, node);
    }

    fn sift_down<K: Priority + ?Sized>(&mut self, mut index: usize, keys: &K) {
        let node = self.heap[index];
        let priority = keys.priority(node);
        loop {
            let child_1_index = index * 2 + 1;
            if child_1_index >= self.heap.len() {
                break;
            }

            // Ties between the children go to the first one.
            let mut child_index = child_1_index;
            let mut child_priority = keys.priority(self.heap[child_1_index]);
            let child_2_index = child_1_index + 1;
            if child_2_index < self.heap.len() {
                let child_2_priority = keys.priority(self.heap[child_2_index]);
                if child_2_priority < child_priority {
                    child_index = child_2_index;
                    child_priority = child_2_priority;
                }
            }

            if priority <= child_priority {
                break;
            }
            self.set_slot(index, self.heap[child_index]);
            index = child_index;
        }
        self.set_slot(index, node);
    }

    // All writes to `heap` go through these two so the position map never falls out of step.

    fn set_slot(&mut self, index: usize, id: NodeId) {
        self.heap[index] = id;
        self.position.insert(id, index);
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position.insert(self.heap[a], a);
        self.position.insert(self.heap[b], b);
    }
}
