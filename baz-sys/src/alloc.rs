//! Bulk zero-initialised memory.
//!
//! This is the only allocator the containers rely on. Blocks are acquired once,
//! up front, and live until the process exits; containers never call it on their
//! own because their capacity is fixed at construction.

use bytemuck::Zeroable;

/// Acquires a zero-initialised `T` on the heap and leaks it.
///
/// Useful for containers too large for the stack. The value is built directly in
/// zeroed memory, so no stack copy of `T` is ever made.
///
/// ```rust
/// let table: &'static mut [u64; 1 << 16] = baz_sys::alloc::zeroed();
/// assert!(table.iter().all(|&word| word == 0));
/// ```
pub fn zeroed<T: Zeroable>() -> &'static mut T {
    tracing::trace!(
        bytes = core::mem::size_of::<T>(),
        ty = core::any::type_name::<T>(),
        "acquired zeroed block"
    );
    Box::leak(bytemuck::zeroed_box::<T>())
}
