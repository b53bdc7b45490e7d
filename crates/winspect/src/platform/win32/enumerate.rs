/*!
Top-level window walk.

`EnumWindows` calls back once per top-level window in the current front-to-
back stacking order; one snapshot is captured per callback. The primitive can
only fail catastrophically (resource exhaustion) - per-window trouble is
absorbed inside the capture and never stops the walk.
*/

#![allow(unsafe_code)]

use windows::core::BOOL;
use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::EnumWindows;

use super::util;
use crate::types::{WindowSnapshot, WinspectError, WinspectResult};
use crate::SnapshotOptions;

struct EnumContext<'a> {
  windows: &'a mut Vec<WindowSnapshot>,
  options: &'a SnapshotOptions,
}

/// Walk all top-level windows front to back, capturing each one.
pub(crate) fn enumerate_windows(
  options: &SnapshotOptions,
) -> WinspectResult<Vec<WindowSnapshot>> {
  let mut windows = Vec::new();
  let mut context = EnumContext {
    windows: &mut windows,
    options,
  };

  unsafe {
    EnumWindows(
      Some(enum_proc),
      LPARAM(core::ptr::addr_of_mut!(context) as isize),
    )
  }
  .map_err(|error| WinspectError::EnumerationFailed {
    code: error.code().0,
    message: error.message(),
  })?;

  Ok(windows)
}

unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
  let context = unsafe { &mut *(lparam.0 as *mut EnumContext<'_>) };
  let snapshot = super::snapshot_window(util::from_hwnd(hwnd), context.options);
  context.windows.push(snapshot);
  true.into()
}
