//! Reusable scratch buffers for the stable partition.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

/// Pool of scratch buffers, created once per top-level sort call.
///
/// Partitions rent a buffer and get it back into the pool when the lease
/// drops, which covers every exit path including unwinds out of a
/// panicking comparator.
pub(crate) struct ScratchPool<T> {
    free: RefCell<Vec<Vec<T>>>,
}

impl<T> ScratchPool<T> {
    pub(crate) fn new() -> Self {
        Self {
            free: RefCell::new(Vec::new()),
        }
    }

    /// Rents a buffer of `len` elements, each initialized to a copy of
    /// `fill`. The fill is rental bookkeeping; observers only see the
    /// logical writes that go through the span built on top.
    pub(crate) fn rent(&self, len: usize, fill: &T) -> ScratchLease<'_, T>
    where
        T: Clone,
    {
        let mut buf = self.free.borrow_mut().pop().unwrap_or_default();
        buf.clear();
        buf.resize(len, fill.clone());
        ScratchLease {
            pool: self,
            buf: Some(buf),
        }
    }
}

pub(crate) struct ScratchLease<'a, T> {
    pool: &'a ScratchPool<T>,
    buf: Option<Vec<T>>,
}

impl<T> Deref for ScratchLease<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.buf.as_deref().unwrap_or(&[])
    }
}

impl<T> DerefMut for ScratchLease<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        match &mut self.buf {
            Some(buf) => buf,
            None => &mut [],
        }
    }
}

impl<T> Drop for ScratchLease<'_, T> {
    fn drop(&mut self) {
        if let Some(mut buf) = self.buf.take() {
            buf.clear();
            self.pool.free.borrow_mut().push(buf);
        }
    }
}
