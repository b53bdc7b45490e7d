/*!
OS side of the mutation operations.

Callers go through [`crate::mutate`], which validates and checks liveness
first. Operations built on `SetWindowPos`/`SetWindowTextW`/
`SetLayeredWindowAttributes` report OS refusals with their error code; the
`ShowWindow`/`EnableWindow` family returns previous state rather than
success, so those are fire-and-forget by OS design.
*/

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use windows::core::HSTRING;
use windows::Win32::Foundation::COLORREF;
use windows::Win32::UI::Input::KeyboardAndMouse::EnableWindow;
use windows::Win32::UI::WindowsAndMessaging::{
  GetWindowLongW, IsWindow, SetLayeredWindowAttributes, SetWindowLongW, SetWindowPos,
  SetWindowTextW, ShowWindow, GWL_EXSTYLE, HWND_NOTOPMOST, HWND_TOPMOST, LWA_ALPHA,
  SHOW_WINDOW_CMD, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SW_HIDE, SW_MAXIMIZE,
  SW_MINIMIZE, SW_RESTORE, SW_SHOW,
};

use super::util::{rejected, to_hwnd};
use crate::mutate::AlphaPlan;
use crate::types::{styles, Rect, WindowHandle, WinspectError, WinspectResult};

/// Liveness check run immediately before every mutation. A stale handle is a
/// distinct outcome from an OS rejection: the OS is never asked.
pub(crate) fn ensure_alive(handle: WindowHandle) -> WinspectResult<()> {
  if unsafe { IsWindow(Some(to_hwnd(handle))) }.as_bool() {
    Ok(())
  } else {
    Err(WinspectError::WindowGone(handle))
  }
}

pub(crate) fn set_title(handle: WindowHandle, title: &str) -> WinspectResult<()> {
  unsafe { SetWindowTextW(to_hwnd(handle), &HSTRING::from(title)) }.map_err(rejected)
}

/// Bounds are pre-validated by the caller; this is the raw move/resize.
pub(crate) fn set_bounds(handle: WindowHandle, bounds: Rect) -> WinspectResult<()> {
  unsafe {
    SetWindowPos(
      to_hwnd(handle),
      None,
      bounds.left,
      bounds.top,
      bounds.width(),
      bounds.height(),
      SWP_NOZORDER | SWP_NOACTIVATE,
    )
  }
  .map_err(rejected)
}

pub(crate) fn set_visible(handle: WindowHandle, visible: bool) {
  show(handle, if visible { SW_SHOW } else { SW_HIDE });
}

pub(crate) fn set_enabled(handle: WindowHandle, enabled: bool) {
  // Returns the previous disabled state, not an outcome.
  let _ = unsafe { EnableWindow(to_hwnd(handle), enabled) };
}

pub(crate) fn set_topmost(handle: WindowHandle, topmost: bool) -> WinspectResult<()> {
  let order = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };
  unsafe {
    SetWindowPos(
      to_hwnd(handle),
      Some(order),
      0,
      0,
      0,
      0,
      SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
    )
  }
  .map_err(rejected)
}

/// Apply an alpha plan: drop the layered style for opaque, otherwise make
/// sure the style is present before setting the attribute (the attribute
/// call fails on non-layered windows).
pub(crate) fn set_alpha(handle: WindowHandle, plan: AlphaPlan) -> WinspectResult<()> {
  let hwnd = to_hwnd(handle);
  match plan {
    AlphaPlan::RemoveLayering => {
      update_ex_style(handle, |ex_style| ex_style & !styles::WS_EX_LAYERED);
      Ok(())
    }
    AlphaPlan::Apply(alpha) => {
      update_ex_style(handle, |ex_style| ex_style | styles::WS_EX_LAYERED);
      unsafe { SetLayeredWindowAttributes(hwnd, COLORREF(0), alpha, LWA_ALPHA) }.map_err(rejected)
    }
  }
}

pub(crate) fn minimize(handle: WindowHandle) {
  show(handle, SW_MINIMIZE);
}

pub(crate) fn maximize(handle: WindowHandle) {
  show(handle, SW_MAXIMIZE);
}

pub(crate) fn restore(handle: WindowHandle) {
  show(handle, SW_RESTORE);
}

fn show(handle: WindowHandle, command: SHOW_WINDOW_CMD) {
  // Returns the previous visibility state, not an outcome.
  let _ = unsafe { ShowWindow(to_hwnd(handle), command) };
}

/// Read-modify-write of the extended-style word. No-op when the bits are
/// already as requested.
fn update_ex_style(handle: WindowHandle, f: impl FnOnce(u32) -> u32) {
  let hwnd = to_hwnd(handle);
  let current = unsafe { GetWindowLongW(hwnd, GWL_EXSTYLE) } as u32;
  let next = f(current);
  if next != current {
    let _ = unsafe { SetWindowLongW(hwnd, GWL_EXSTYLE, next as i32) };
  }
}
