/*!
Best-effort window icon resolution.

Asking a window for its icon means messaging its UI thread, which may be
hung. Every message send here carries a bounded timeout and aborts early if
the target thread is not responding, so the worst case is one timeout per
probe - never a stalled enumeration. Timing out is not an error, it is "no
answer", and the chain falls through to the class-registered icons which need
no message at all.
*/

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use std::time::Duration;

use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
  GetClassLongPtrW, SendMessageTimeoutW, GCLP_HICON, GCLP_HICONSM, GET_CLASS_LONG_INDEX,
  ICON_BIG, ICON_SMALL, SMTO_ABORTIFHUNG, SMTO_BLOCK, WM_GETICON,
};

use crate::types::IconHandle;

/// Probe order: window small icon, window large icon, class small icon,
/// class large icon. First non-null answer wins.
pub(super) fn probe_window_icon(hwnd: HWND, timeout: Duration) -> Option<IconHandle> {
  icon_from_message(hwnd, ICON_SMALL, timeout)
    .or_else(|| icon_from_message(hwnd, ICON_BIG, timeout))
    .or_else(|| icon_from_class(hwnd, GCLP_HICONSM))
    .or_else(|| icon_from_class(hwnd, GCLP_HICON))
}

/// Ask the window itself, with a bounded wait.
fn icon_from_message(hwnd: HWND, which: u32, timeout: Duration) -> Option<IconHandle> {
  let mut answer: usize = 0;
  let status = unsafe {
    SendMessageTimeoutW(
      hwnd,
      WM_GETICON,
      WPARAM(which as usize),
      LPARAM(0),
      SMTO_ABORTIFHUNG | SMTO_BLOCK,
      timeout.as_millis() as u32,
      Some(&mut answer),
    )
  };

  // Zero status is timeout or a hung target; zero answer is "no icon".
  if status.0 == 0 || answer == 0 {
    None
  } else {
    Some(IconHandle(answer as isize))
  }
}

/// Fall back to the icon registered with the window's class.
fn icon_from_class(hwnd: HWND, which: GET_CLASS_LONG_INDEX) -> Option<IconHandle> {
  let value = unsafe { GetClassLongPtrW(hwnd, which) };
  if value == 0 {
    None
  } else {
    Some(IconHandle(value as isize))
  }
}
