//! Marker types selecting the base alignment of a managed region.
//!
//! A [`Buddy`](crate::Buddy) embeds one marker value directly below its
//! region. The markers are sized to their own alignment, so the region that
//! follows them stays aligned while the marker's final byte provides the
//! order slot for the block at offset zero.

use crate::private::Sealed;

/// Selects the base alignment of a [`Buddy`](crate::Buddy)'s managed region.
///
/// Returned pointers are always aligned to their block size *relative to the
/// region base*; the marker decides how the base itself is placed. The
/// default, [`Align8`], matches the natural alignment of a 64-bit word.
///
/// This trait is sealed: the only implementors are the `Align*` markers in
/// this module. Markers must not be smaller than [`Align8`], so that every
/// block of the region can hold a free-list link at its natural alignment.
pub trait BufferAlign: Sealed + Sized {
    /// The value embedded below the region; its last byte is the pad slot.
    const PAD: Self;
}

macro_rules! align_markers {
    ($($name:ident => $align:literal,)*) => {
        $(
            #[doc = concat!("Aligns the managed region to ", stringify!($align), " bytes.")]
            #[derive(Clone, Copy, Debug)]
            #[repr(C, align($align))]
            pub struct $name([u8; $align]);

            impl Sealed for $name {}

            impl BufferAlign for $name {
                const PAD: Self = $name([0; $align]);
            }
        )*
    };
}

align_markers! {
    Align8 => 8,
    Align16 => 16,
    Align32 => 32,
    Align64 => 64,
    Align128 => 128,
    Align256 => 256,
    Align512 => 512,
    Align1024 => 1024,
    Align2048 => 2048,
    Align4096 => 4096,
}
