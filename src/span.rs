use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use crate::context::Context;

/// Tag that tells an observer which backing buffer an operation touched.
///
/// The tag only routes observation events; it never influences what an
/// algorithm does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(pub u32);

impl BufferId {
    /// The caller's primary array.
    pub const MAIN: BufferId = BufferId(0);
    /// Auxiliary scratch storage, e.g. the stable partition buffer.
    pub const SCRATCH: BufferId = BufferId(1);
}

/// Rejected `first`/`last` combination of a ranged sort call.
///
/// Returned before any element is read or moved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeError {
    pub first: usize,
    pub last: usize,
    pub len: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid sort range {}..{} for sequence of length {}",
            self.first, self.last, self.len
        )
    }
}

impl Error for RangeError {}

pub(crate) fn check_range(len: usize, first: usize, last: usize) -> Result<(), RangeError> {
    if first > last || last > len {
        return Err(RangeError { first, last, len });
    }
    Ok(())
}

/// A mutable view over a sequence that routes every element access through
/// an observer.
///
/// `SortSpan` couples the backing slice with a comparator, an observer and a
/// buffer id. Algorithms only ever touch their data through a span, which is
/// what lets the same implementation run unobserved at full speed (with
/// [`NullContext`](crate::NullContext) the notifications compile away) or
/// drive statistics collection and step-by-step visualization.
///
/// Every operation notifies the observer exactly once per logical array
/// touch, in the order the touches happen. Indices are checked; passing an
/// out-of-range index is a programmer error and panics before the observer
/// is notified.
pub struct SortSpan<'a, T, F, X> {
    data: &'a mut [T],
    compare: &'a F,
    ctx: &'a X,
    buffer: BufferId,
}

impl<'a, T, F, X> SortSpan<'a, T, F, X>
where
    F: Fn(&T, &T) -> Ordering,
    X: Context<T>,
{
    pub fn new(data: &'a mut [T], compare: &'a F, ctx: &'a X, buffer: BufferId) -> Self {
        Self {
            data,
            compare,
            ctx,
            buffer,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn buffer(&self) -> BufferId {
        self.buffer
    }

    /// Returns a copy of the element at `index`.
    #[inline]
    pub fn read(&self, index: usize) -> T
    where
        T: Clone,
    {
        let value = &self.data[index];
        self.ctx.on_read(self.buffer, index, value);
        value.clone()
    }

    /// Stores `value` at `index`.
    #[inline]
    pub fn write(&mut self, index: usize, value: T) {
        self.ctx.on_write(self.buffer, index, &value);
        self.data[index] = value;
    }

    /// Compares the elements at `a` and `b`.
    #[inline]
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        let decided = (self.compare)(&self.data[a], &self.data[b]);
        self.ctx.on_compare(self.buffer, a, b, decided);
        decided
    }

    /// Compares the element at `index` against an already extracted value,
    /// typically a pivot, without re-reading it from the sequence.
    #[inline]
    pub fn compare_value(&self, index: usize, value: &T) -> Ordering {
        let decided = (self.compare)(&self.data[index], value);
        self.ctx.on_compare_value(self.buffer, index, decided);
        decided
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// `a == b` is a free no-op and is not reported; partition sweeps over
    /// already ordered data self-swap constantly and must not flood the
    /// observer.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.ctx.on_swap(self.buffer, a, b);
        self.data.swap(a, b);
    }

    /// Copies `count` elements starting at `src` into `dest`, reporting one
    /// read per source element and one write per destination element.
    pub fn copy_to(
        &self,
        src: usize,
        dest: &mut SortSpan<'_, T, F, X>,
        dest_start: usize,
        count: usize,
    ) where
        T: Clone,
    {
        for i in 0..count {
            let value = self.read(src + i);
            dest.write(dest_start + i, value);
        }
    }

    /// Builds a sibling span over auxiliary storage that shares this span's
    /// comparator and observer.
    pub fn scratch_span<'b>(&self, data: &'b mut [T], buffer: BufferId) -> SortSpan<'b, T, F, X>
    where
        'a: 'b,
    {
        SortSpan {
            data,
            compare: self.compare,
            ctx: self.ctx,
            buffer,
        }
    }
}
