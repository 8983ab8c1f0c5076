use std::collections::VecDeque;

/// Removal discipline of the open list for uninformed search.
///
/// DFS and BFS are the same algorithm under different disciplines, so the
/// driver is generic over this trait. A* keeps a ranked heap of its own
/// because it also re-ranks entries through the best-g map.
pub trait Frontier<T>: Default {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;

    #[must_use]
    fn len(&self) -> usize;
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in first-out; yields depth-first expansion order.
#[derive(Debug)]
pub struct Lifo<T> {
    items: Vec<T>,
}

impl<T> Default for Lifo<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Frontier<T> for Lifo<T> {
    #[inline(always)]
    fn push(&mut self, item: T) {
        self.items.push(item);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in first-out; yields breadth-first expansion order.
#[derive(Debug)]
pub struct Fifo<T> {
    items: VecDeque<T>,
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Frontier<T> for Fifo<T> {
    #[inline(always)]
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.items.len()
    }
}
