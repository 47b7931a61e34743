#![doc = include_str!("../README.md")]
#![no_std]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod align;
pub mod buddy;


use core::{mem, num::NonZeroUsize, ptr::NonNull};

use sptr::Strict;

#[doc(inline)]
pub use crate::{
    align::{Align8, BufferAlign},
    buddy::Buddy,
};

// Free lists never hold pointers into the managed region, only offsets
// relative to its base. Offsets survive the whole allocator being moved,
// which addresses would not, and materializing a pointer from an offset
// always goes through the region base, keeping its provenance.

/// The region-relative offset of a block, biased upwards by one.
///
/// Offset zero is a legal block position, so the stored value is
/// `offset + 1`. The bias preserves the [`NonZeroUsize`] niche: an optional
/// offset is the size of a pointer, which is what the minimum block size is
/// derived from.
#[derive(Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
struct BlockOfs(NonZeroUsize);

impl BlockOfs {
    /// The block at the very start of the region.
    const ZERO: BlockOfs = BlockOfs(NonZeroUsize::MIN);

    fn new(ofs: usize) -> BlockOfs {
        BlockOfs(NonZeroUsize::new(ofs + 1).unwrap())
    }

    /// The unbiased offset.
    fn get(self) -> usize {
        self.0.get() - 1
    }
}

/// A link in a free list, overlaid on the first bytes of a free block.
///
/// An all-zero bit pattern reads as `next: None`, so the zero-initialized
/// region doubles as a terminated one-entry top-order list at construction.
#[derive(Copy, Clone)]
#[repr(C)]
struct BlockLink {
    next: Option<BlockOfs>,
}

/// A pointer to the base of the region managed by an allocator.
///
/// All in-band reads and writes, and every pointer handed to a caller, are
/// derived from this pointer. It is created from a pointer to the allocator's
/// full backing storage, so its provenance covers the order slot one byte
/// below the region as well as the region itself.
#[derive(Copy, Clone)]
struct RegionPtr {
    ptr: NonNull<u8>,
}

impl RegionPtr {
    /// Returns a pointer to the first byte of the block at `ofs`.
    ///
    /// # Safety
    ///
    /// `ofs` must not exceed the size of the managed region.
    #[inline]
    unsafe fn block(self, ofs: usize) -> NonNull<u8> {
        // SAFETY: the caller keeps `ofs` within the region.
        unsafe { NonNull::new_unchecked(self.ptr.as_ptr().add(ofs)) }
    }

    /// Calculates the offset from the region base to `block`.
    fn offset_to(self, block: NonNull<u8>) -> usize {
        Strict::addr(block.as_ptr())
            .checked_sub(Strict::addr(self.ptr.as_ptr()))
            .expect("pointer below the managed region")
    }

    /// Reads the link stored in the first bytes of the block at `ofs`.
    ///
    /// # Safety
    ///
    /// The block at `ofs` must be free: its leading bytes hold either a link
    /// written by [`Self::write_link`] or the zero-initialized contents of a
    /// fresh region.
    unsafe fn read_link(self, ofs: usize) -> BlockLink {
        unsafe { self.block(ofs).as_ptr().cast::<BlockLink>().read() }
    }

    /// Overlays a link on the first bytes of the block at `ofs`.
    ///
    /// # Safety
    ///
    /// The block at `ofs` must be unallocated and span at least
    /// `size_of::<BlockLink>()` bytes of the region.
    unsafe fn write_link(self, ofs: usize, link: BlockLink) {
        let block = unsafe { self.block(ofs) };
        debug_assert_eq!(
            Strict::addr(block.as_ptr()) & (mem::align_of::<BlockLink>() - 1),
            0
        );

        unsafe { block.as_ptr().cast::<BlockLink>().write(link) };
    }

    /// Reads the order recorded in the byte below the block at `ofs`.
    ///
    /// # Safety
    ///
    /// `ofs` must lie within the region, and the slot must have been written
    /// by [`Self::write_order`] when the block was handed out.
    unsafe fn read_order(self, ofs: usize) -> u32 {
        unsafe { u32::from(self.ptr.as_ptr().add(ofs).sub(1).read()) }
    }

    /// Records `order` in the byte below the block at `ofs`.
    ///
    /// For the block at offset zero the slot is the pad byte the allocator
    /// keeps below the region; for every other block it is the last byte of
    /// some other block of the region.
    ///
    /// # Safety
    ///
    /// `ofs` must lie within the region.
    unsafe fn write_order(self, ofs: usize, order: u32) {
        unsafe { self.ptr.as_ptr().add(ofs).sub(1).write(order as u8) };
    }
}

#[doc(hidden)]
mod private {
    pub trait Sealed {}
}
