//! Auto-growing contiguous byte buffer with small-buffer optimization.
//!
//! Small payloads live in a fixed region embedded in the buffer itself and
//! never touch the heap. Once the payload outgrows that region the bytes are
//! moved to a heap allocation, which then grows by doubling.
//!
//! ```
//! use tinyweb::buffer::{DynamicBuffer, INLINE_CAPACITY};
//!
//! let mut buf = DynamicBuffer::with_capacity(128);
//! assert!(buf.is_inline());
//! assert_eq!(buf.capacity(), INLINE_CAPACITY);
//!
//! buf.append(b"GET / HTTP/1.1\r\n");
//! assert_eq!(buf.as_slice(), b"GET / HTTP/1.1\r\n");
//! ```

use std::fmt;

use bytes::buf::UninitSlice;
use bytes::BufMut;

/// Size of the embedded storage region.
pub const INLINE_CAPACITY: usize = 512;

#[derive(Clone)]
enum Storage {
    Inline([u8; INLINE_CAPACITY]),
    /// Heap region; `Vec::len()` is the capacity and every byte is initialized.
    External(Vec<u8>),
}

/// Owned, contiguous, auto-growing byte container.
#[derive(Clone)]
pub struct DynamicBuffer {
    len: usize,
    storage: Storage,
}

impl DynamicBuffer {
    /// Creates an empty inline buffer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty buffer.
    ///
    /// Requests up to [`INLINE_CAPACITY`] use the embedded region (and report
    /// that full region as capacity); larger requests allocate exactly
    /// `initial_capacity` bytes on the heap.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        let storage = if initial_capacity <= INLINE_CAPACITY {
            Storage::Inline([0; INLINE_CAPACITY])
        } else {
            Storage::External(vec![0; initial_capacity])
        };

        Self { len: 0, storage }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline(_) => INLINE_CAPACITY,
            Storage::External(heap) => heap.len(),
        }
    }

    /// Returns `true` while the payload lives in the embedded region.
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline(_))
    }

    /// The valid bytes, `[0, len)`.
    pub fn as_slice(&self) -> &[u8] {
        &self.region()[..self.len]
    }

    fn region(&self) -> &[u8] {
        match &self.storage {
            Storage::Inline(inline) => inline,
            Storage::External(heap) => heap,
        }
    }

    fn region_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Inline(inline) => inline,
            Storage::External(heap) => heap,
        }
    }

    /// Ensures room for `additional` more bytes past the current length.
    ///
    /// Capacity doubles from its current value until it covers the required
    /// total, so a single call relocates the payload at most once. Tail space
    /// gained by growing is zero-filled.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`. Allocation failure
    /// aborts the process.
    pub fn reserve(&mut self, additional: usize) {
        let required = self
            .len
            .checked_add(additional)
            .expect("DynamicBuffer length overflow");
        let capacity = self.capacity();
        if required <= capacity {
            return;
        }

        let mut new_capacity = capacity
            .checked_mul(2)
            .expect("DynamicBuffer capacity overflow");
        while new_capacity < required {
            new_capacity = new_capacity
                .checked_mul(2)
                .expect("DynamicBuffer capacity overflow");
        }

        if let Storage::External(heap) = &mut self.storage {
            heap.reserve_exact(new_capacity - heap.len());
            heap.resize(new_capacity, 0);
            return;
        }

        let mut heap = vec![0; new_capacity];
        heap[..self.len].copy_from_slice(self.as_slice());
        self.storage = Storage::External(heap);
    }

    /// Appends `bytes` and returns the offset at which they start.
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        let offset = self.len;
        self.reserve(bytes.len());
        self.region_mut()[offset..offset + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        offset
    }

    /// Appends `count` zero bytes and returns the offset at which they start.
    pub fn append_zeros(&mut self, count: usize) -> usize {
        let offset = self.len;
        self.reserve(count);
        // Space below capacity may still hold bytes from before a clear or exchange.
        self.region_mut()[offset..offset + count].fill(0);
        self.len += count;
        offset
    }

    /// Appends text. `None` takes the whole string, `Some(n)` at most `n` bytes.
    pub fn append_text(&mut self, text: &str, len: Option<usize>) -> usize {
        let bytes = text.as_bytes();
        let len = len.map_or(bytes.len(), |n| n.min(bytes.len()));
        self.append(&bytes[..len])
    }

    /// Resets the length to zero. Capacity and storage mode are kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Swaps the entire contents of two buffers.
    ///
    /// Heap regions change hands by pointer; payloads held in embedded
    /// regions are copied, since those regions cannot move.
    pub fn exchange(&mut self, other: &mut DynamicBuffer) {
        match (self.is_inline(), other.is_inline()) {
            (true, true) => self.exchange_inline(other),
            (true, false) => self.adopt_external(other),
            (false, true) => other.adopt_external(self),
            (false, false) => {
                if let (Storage::External(mine), Storage::External(theirs)) =
                    (&mut self.storage, &mut other.storage)
                {
                    std::mem::swap(mine, theirs);
                }
            }
        }

        std::mem::swap(&mut self.len, &mut other.len);
    }

    fn exchange_inline(&mut self, other: &mut DynamicBuffer) {
        if self.len > other.len {
            return other.exchange_inline(self);
        }

        let (short, long) = (self.len, other.len);
        let (Storage::Inline(mine), Storage::Inline(theirs)) =
            (&mut self.storage, &mut other.storage)
        else {
            return;
        };

        let mut scratch = [0u8; INLINE_CAPACITY];
        scratch[..short].copy_from_slice(&mine[..short]);
        mine[..long].copy_from_slice(&theirs[..long]);
        theirs[..short].copy_from_slice(&scratch[..short]);
    }

    /// `self` is inline, `external` owns a heap region.
    fn adopt_external(&mut self, external: &mut DynamicBuffer) {
        let mut relocated = [0u8; INLINE_CAPACITY];
        relocated[..self.len].copy_from_slice(self.as_slice());

        self.storage = std::mem::replace(&mut external.storage, Storage::Inline(relocated));
    }
}

impl Default for DynamicBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for DynamicBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for DynamicBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("inline", &self.is_inline())
            .finish()
    }
}

// SAFETY: `chunk_mut` only exposes initialized bytes in `[len, capacity)`,
// and `advance_mut` refuses to move `len` past capacity.
unsafe impl BufMut for DynamicBuffer {
    fn remaining_mut(&self) -> usize {
        isize::MAX as usize - self.len
    }

    unsafe fn advance_mut(&mut self, cnt: usize) {
        let new_len = self.len + cnt;
        assert!(
            new_len <= self.capacity(),
            "advance_mut({cnt}) past capacity {}",
            self.capacity()
        );
        self.len = new_len;
    }

    fn chunk_mut(&mut self) -> &mut UninitSlice {
        if self.len == self.capacity() {
            self.reserve(1);
        }
        let len = self.len;
        UninitSlice::new(&mut self.region_mut()[len..])
    }

    fn put_slice(&mut self, src: &[u8]) {
        self.append(src);
    }
}
