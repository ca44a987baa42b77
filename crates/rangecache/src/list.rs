//! Recency list: arena-backed doubly-linked list
//!
//! Nodes live in a `Vec` slot arena and link to each other by slot index, so a
//! [`NodeId`] stays valid for as long as its node is in the list. Freed slots go
//! on a free list and are reused by later inserts.

/// Opaque handle to a node in a [`RecencyList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Node in the recency list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly-linked list ordered from most recently used (head) to least recently used (tail)
pub struct RecencyList<K, V> {
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    /// Create an empty list
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty list with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Insert a new node at the head and return its handle
    pub fn push_front(&mut self, key: K, value: V) -> NodeId {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key,
            value,
            prev: None,
            next: None,
        });
        self.link_front(idx);
        self.len += 1;
        NodeId(idx)
    }

    /// Unlink a node from wherever it sits and hand back its entry
    ///
    /// Each handle must be removed at most once. A second call returns `None`
    /// only while the slot has not been reused by a later insert.
    pub fn remove(&mut self, id: NodeId) -> Option<(K, V)> {
        let idx = id.0;
        if !matches!(self.nodes.get(idx), Some(Some(_))) {
            return None;
        }

        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.free_list.push(idx);
        self.len -= 1;
        Some((node.key, node.value))
    }

    /// Relink a node at the head, keeping its handle and value
    pub fn move_to_front(&mut self, id: NodeId) {
        let idx = id.0;
        if self.head == Some(idx) || !matches!(self.nodes.get(idx), Some(Some(_))) {
            return;
        }

        self.unlink(idx);
        self.link_front(idx);
    }

    /// Remove and return the tail (least recently used) entry
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let tail = self.tail?;
        self.remove(NodeId(tail))
    }

    /// Handle of the most recently used node
    pub fn head(&self) -> Option<NodeId> {
        self.head.map(NodeId)
    }

    /// Handle of the least recently used node
    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(NodeId)
    }

    /// Borrow the key of a node
    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id.0).map(|node| &node.key)
    }

    /// Borrow the value of a node
    pub fn get(&self, id: NodeId) -> Option<&V> {
        self.node(id.0).map(|node| &node.value)
    }

    /// Mutably borrow the value of a node
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.nodes
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .map(|node| &mut node.value)
    }

    /// Number of linked nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node and release the arena
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate entries from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn node(&self, idx: usize) -> Option<&Node<K, V>> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(head_idx) => {
                if let Some(head) = &mut self.nodes[head_idx] {
                    head.prev = Some(idx);
                }
            }
            None => {
                self.tail = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &mut self.nodes[idx] {
            Some(node) => (node.prev.take(), node.next.take()),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`RecencyList`] in recency order
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.next;
        Some((&node.key, &node.value))
    }
}
