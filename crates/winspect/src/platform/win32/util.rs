/*! Handle conversion and UTF-16 helpers. */

#![allow(unsafe_code)]

use windows::core::Error as OsError;
use windows::Win32::Foundation::{HWND, RECT};

use crate::types::{Rect, WindowHandle, WinspectError};

/// Reconstruct the OS handle from its stored pointer value.
pub(super) fn to_hwnd(handle: WindowHandle) -> HWND {
  HWND(handle.0 as *mut core::ffi::c_void)
}

pub(super) fn from_hwnd(hwnd: HWND) -> WindowHandle {
  WindowHandle(hwnd.0 as isize)
}

/// Null handles mean "no window" in relationship queries.
pub(super) fn non_null(hwnd: HWND) -> Option<WindowHandle> {
  if hwnd.is_invalid() {
    None
  } else {
    Some(from_hwnd(hwnd))
  }
}

pub(super) const fn from_rect(rect: RECT) -> Rect {
  Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

/// Decode `len` UTF-16 units from a query buffer.
pub(super) fn decode_utf16(buffer: &[u16], len: usize) -> String {
  buffer
    .get(..len)
    .map(String::from_utf16_lossy)
    .unwrap_or_default()
}

/// Map an OS refusal onto the mutation error taxonomy.
pub(super) fn rejected(error: OsError) -> WinspectError {
  WinspectError::Rejected {
    code: error.code().0,
    message: error.message(),
  }
}
