//! Little-endian field readers over fixed byte windows.
//!
//! Callers are expected to have bounds-checked the buffer; a window that
//! runs past the end yields `None` rather than panicking.

use core::convert::TryInto;

/// Read a little-endian `u16` starting at `offset`.
pub(crate) fn le_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    window(bytes, offset).map(u16::from_le_bytes)
}

/// Read a little-endian `u32` starting at `offset`.
pub(crate) fn le_u32(bytes: &[u8], offset: usize) -> Option<u32> {
    window(bytes, offset).map(u32::from_le_bytes)
}

/// Borrow exactly `N` bytes starting at `offset`.
pub(crate) fn window<const N: usize>(bytes: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    bytes.get(offset..end)?.try_into().ok()
}
