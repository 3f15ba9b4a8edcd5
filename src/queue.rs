//! A singly linked FIFO queue. Entries are pushed at the rear and popped at
//! the front, both in `O(1)`. It backs the breadth first walk in
//! [`level_with_max_sum`][crate::BinaryTree::level_with_max_sum].

use std::marker::PhantomData;
use std::ptr::NonNull;

struct Entry<T> {
    item: T,
    next: Link<T>,
}

type Link<T> = Option<NonNull<Entry<T>>>;

pub(crate) struct Queue<T> {
    // INVARIANTS:
    //  * `front` is `None` iff `rear` is `None`
    //  * every entry reachable from `front` was allocated by `Box::new` in `enqueue` and is owned
    //    by this queue alone
    //  * `rear` is the last entry reachable from `front`
    front: Link<T>,
    rear: Link<T>,
    marker: PhantomData<Box<Entry<T>>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<T> Queue<T> {
    pub(crate) fn new() -> Self {
        Self {
            front: None,
            rear: None,
            marker: PhantomData,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    pub(crate) fn enqueue(&mut self, item: T) {
        let entry = NonNull::from(Box::leak(Box::new(Entry { item, next: None })));
        match self.rear {
            // SAFETY: `rear` points at a live entry owned by this queue and we hold `&mut self`
            // so nothing else can be borrowing it.
            Some(mut rear) => unsafe { rear.as_mut().next = Some(entry) },
            None => self.front = Some(entry),
        }
        self.rear = Some(entry);
    }

    /// Removes the front entry, releasing its allocation before handing back the item.
    pub(crate) fn dequeue(&mut self) -> Option<T> {
        self.front.map(|front| {
            // SAFETY: `front` was allocated with `Box::new` in `enqueue` and is unlinked from the
            // queue right below, so it is freed exactly once and never dereferenced again.
            let entry = unsafe { Box::from_raw(front.as_ptr()) };
            self.front = entry.next;
            if self.front.is_none() {
                self.rear = None;
            }
            entry.item
        })
    }
}
