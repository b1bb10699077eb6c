use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

/// Heap buffer of `cap` slots, every one of them initialized.
///
/// This is the only owner of raw memory in the crate. Nothing is ever left
/// uninitialized, so the whole buffer can be viewed as a slice and `Drop`
/// drops all `cap` slots before releasing the allocation.
pub(crate) struct Slots<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: Slots<T> owns its elements exactly like Box<[T]> does.
unsafe impl<T: Send> Send for Slots<T> {}
// SAFETY: shared access only hands out &T.
unsafe impl<T: Sync> Sync for Slots<T> {}

impl<T> Slots<T> {
    /// An empty buffer, no allocation.
    pub(crate) fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates `cap` slots and fills slot `i` with `f(i)`.
    ///
    /// If `f` panics, the slots written so far are dropped and the allocation
    /// is released before the panic continues.
    pub(crate) fn from_fn(cap: usize, mut f: impl FnMut(usize) -> T) -> Self {
        if cap == 0 {
            return Self::empty();
        }

        let ptr = Self::allocate(cap);
        let mut guard = FillGuard {
            ptr,
            cap,
            filled: 0,
        };

        while guard.filled < cap {
            let value = f(guard.filled);
            unsafe {
                // SAFETY: filled < cap, the slot is allocated and not yet written.
                ptr::write(ptr.as_ptr().add(guard.filled), value);
            }
            guard.filled += 1;
        }

        mem::forget(guard);
        Self {
            ptr,
            cap,
            _marker: PhantomData,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// All `cap` slots, including the logically unused tail.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: every slot in [0, cap) is initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: every slot in [0, cap) is initialized and we hold &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    fn allocate(cap: usize) -> NonNull<T> {
        let layout = Layout::array::<T>(cap).expect("Capacity overflow");
        if layout.size() == 0 {
            return NonNull::dangling();
        }

        let ptr = unsafe { alloc(layout) };
        match NonNull::new(ptr as *mut T) {
            Some(p) => p,
            None => handle_alloc_error(layout),
        }
    }

    /// Releases the allocation without touching its contents.
    ///
    /// # Safety
    /// `ptr` must come from `allocate(cap)` and must not be used afterwards.
    unsafe fn release(ptr: NonNull<T>, cap: usize) {
        if cap == 0 {
            return;
        }
        let layout = Layout::array::<T>(cap).expect("Capacity overflow");
        if layout.size() != 0 {
            unsafe { dealloc(ptr.as_ptr() as *mut u8, layout) };
        }
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        if self.cap != 0 {
            unsafe {
                // 1. drop every slot, used or not
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.cap));
                // 2. release the block
                Self::release(self.ptr, self.cap);
            }
        }
    }
}

/// Cleans up a partially filled allocation if the fill closure unwinds.
struct FillGuard<T> {
    ptr: NonNull<T>,
    cap: usize,
    filled: usize,
}

impl<T> Drop for FillGuard<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.filled));
            Slots::<T>::release(self.ptr, self.cap);
        }
    }
}
