//! Dense, ID-indexed storage for nets and elements.
//!
//! Items are only ever appended, so an ID handed out by [`Arena::alloc`] stays
//! valid for the lifetime of the arena and doubles as an index into the
//! simulator's state arrays.

use std::marker::PhantomData;
use std::ops::Index;

/// A `u32` newtype usable as an arena key and as a state-array index.
pub trait ArenaId: Copy {
    /// Wraps a raw index.
    fn from_raw(index: u32) -> Self;

    /// The raw index.
    fn as_raw(self) -> u32;

    /// The raw index as a `usize`, for slice indexing.
    fn index(self) -> usize {
        self.as_raw() as usize
    }
}

/// A dense container addressed by an [`ArenaId`].
#[derive(Debug, Clone)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the ID the next [`alloc`](Self::alloc) will hand out.
    pub fn next_id(&self) -> I {
        I::from_raw(self.items.len() as u32)
    }

    /// Appends an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = self.next_id();
        self.items.push(item);
        id
    }

    /// The item behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not allocated by this arena.
    pub fn get(&self, id: I) -> &T {
        &self.items[id.index()]
    }

    /// Mutable access to the item behind `id`. Panics like [`get`](Self::get).
    pub fn get_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.index()]
    }

    /// Returns `true` if `id` was allocated by this arena.
    pub fn contains(&self, id: I) -> bool {
        id.index() < self.items.len()
    }

    /// Number of items allocated.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` before the first allocation.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in allocation order, which is also ID order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        self.get(id)
    }
}
