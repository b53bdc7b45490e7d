/*!
Per-window attribute queries.

One function per query, each with its own local failure policy: a step that
cannot be answered logs at debug level and resolves to its documented
default. No step ever aborts the capture - a protected, hung, or
half-destroyed window yields a partial snapshot, not an error.
*/

#![allow(unsafe_code)]
#![allow(
  clippy::cast_possible_truncation,
  clippy::cast_sign_loss,
  clippy::cast_possible_wrap
)]

use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{
  DwmGetWindowAttribute, DwmIsCompositionEnabled, DWMWA_CLOAKED, DWMWA_EXTENDED_FRAME_BOUNDS,
};
use windows::Win32::UI::Input::KeyboardAndMouse::IsWindowEnabled;
use windows::Win32::UI::WindowsAndMessaging::{
  GetClassNameW, GetClientRect, GetLayeredWindowAttributes, GetParent, GetWindow,
  GetWindowLongW, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
  GetWindowThreadProcessId, IsHungAppWindow, IsIconic, IsWindowVisible, IsZoomed,
  GWL_EXSTYLE, GWL_STYLE, GW_OWNER, LAYERED_WINDOW_ATTRIBUTES_FLAGS, LWA_ALPHA,
  WINDOW_LONG_PTR_INDEX,
};

use super::{icon, process, util};
use crate::types::{styles, RawWindowState, Rect, WindowHandle};
use crate::SnapshotOptions;

/// Class-name buffer size in UTF-16 units. Longer class names are silently
/// truncated; that is a platform limitation, not a failure.
const CLASS_NAME_CAPACITY: usize = 256;

/// Run the full query sequence for one window.
///
/// The handle is assumed valid at entry. If the window dies mid-sequence the
/// remaining queries return zeroed defaults; the partial record is still
/// returned.
pub(super) fn read_window_state(
  handle: WindowHandle,
  options: &SnapshotOptions,
) -> RawWindowState {
  let hwnd = util::to_hwnd(handle);

  let (thread_id, process_id) = thread_process_ids(hwnd);
  let ex_style = window_long(hwnd, GWL_EXSTYLE);

  RawWindowState {
    parent: parent_of(hwnd),
    owner: owner_of(hwnd),
    title: window_title(hwnd),
    class_name: class_name_of(hwnd),
    process_id,
    thread_id,
    process_image: process::image_path(process_id),
    bounds: window_rect(hwnd),
    client: client_rect(hwnd),
    style: window_long(hwnd, GWL_STYLE),
    ex_style,
    visible: unsafe { IsWindowVisible(hwnd) }.as_bool(),
    enabled: unsafe { IsWindowEnabled(hwnd) }.as_bool(),
    minimized: unsafe { IsIconic(hwnd) }.as_bool(),
    maximized: unsafe { IsZoomed(hwnd) }.as_bool(),
    cloaked: is_cloaked(hwnd),
    hung: unsafe { IsHungAppWindow(hwnd) }.as_bool(),
    layered_alpha: if ex_style & styles::WS_EX_LAYERED != 0 {
      layered_alpha(hwnd)
    } else {
      None
    },
    icon: if options.icons_enabled() {
      icon::probe_window_icon(hwnd, options.icon_timeout())
    } else {
      None
    },
    extended_frame: extended_frame_bounds(hwnd),
  }
}

/// Parent in the window hierarchy. Absence is the normal case for a
/// top-level window, so the error branch is not logged.
fn parent_of(hwnd: HWND) -> Option<WindowHandle> {
  unsafe { GetParent(hwnd) }.ok().and_then(util::non_null)
}

/// Owner window, if any.
fn owner_of(hwnd: HWND) -> Option<WindowHandle> {
  unsafe { GetWindow(hwnd, GW_OWNER) }.ok().and_then(util::non_null)
}

/// Title text: length query first, then a buffer sized exactly to it.
/// Zero length (no title, or a window that refuses to answer) is the empty
/// string.
fn window_title(hwnd: HWND) -> String {
  let len = unsafe { GetWindowTextLengthW(hwnd) };
  if len <= 0 {
    return String::new();
  }

  let mut buffer = vec![0u16; len as usize + 1];
  let copied = unsafe { GetWindowTextW(hwnd, &mut buffer) };
  util::decode_utf16(&buffer, copied.max(0) as usize)
}

fn class_name_of(hwnd: HWND) -> String {
  let mut buffer = [0u16; CLASS_NAME_CAPACITY];
  let len = unsafe { GetClassNameW(hwnd, &mut buffer) };
  util::decode_utf16(&buffer, len.max(0) as usize)
}

/// Returns (thread id, process id) of the window's creator.
fn thread_process_ids(hwnd: HWND) -> (u32, u32) {
  let mut process_id = 0u32;
  let thread_id = unsafe { GetWindowThreadProcessId(hwnd, Some(&mut process_id)) };
  (thread_id, process_id)
}

fn window_rect(hwnd: HWND) -> Rect {
  let mut rect = RECT::default();
  if let Err(error) = unsafe { GetWindowRect(hwnd, &mut rect) } {
    log::debug!("GetWindowRect failed for {hwnd:?}: {error}");
  }
  util::from_rect(rect)
}

fn client_rect(hwnd: HWND) -> Rect {
  let mut rect = RECT::default();
  if let Err(error) = unsafe { GetClientRect(hwnd, &mut rect) } {
    log::debug!("GetClientRect failed for {hwnd:?}: {error}");
  }
  util::from_rect(rect)
}

/// Raw style word. Styles are 32-bit on every architecture.
fn window_long(hwnd: HWND, index: WINDOW_LONG_PTR_INDEX) -> u32 {
  unsafe { GetWindowLongW(hwnd, index) } as u32
}

/// Compositor-level cloaking. The attribute is a bitmask of cloak reasons;
/// any nonzero value counts. False when the compositor declines to answer.
fn is_cloaked(hwnd: HWND) -> bool {
  let mut cloaked = 0u32;
  let queried = unsafe {
    DwmGetWindowAttribute(
      hwnd,
      DWMWA_CLOAKED,
      core::ptr::addr_of_mut!(cloaked).cast(),
      std::mem::size_of::<u32>() as u32,
    )
  };
  queried.is_ok() && cloaked != 0
}

/// Effective alpha of a layered window. `None` when the attribute query
/// fails or does not report an alpha component (color-key-only layering).
fn layered_alpha(hwnd: HWND) -> Option<u8> {
  let mut alpha = 0u8;
  let mut flags = LAYERED_WINDOW_ATTRIBUTES_FLAGS::default();
  unsafe { GetLayeredWindowAttributes(hwnd, None, Some(&mut alpha), Some(&mut flags)) }.ok()?;
  flags.contains(LWA_ALPHA).then_some(alpha)
}

/// Compositor-reported visual bounds. Present only when composition is
/// enabled and the per-window query succeeds.
fn extended_frame_bounds(hwnd: HWND) -> Option<Rect> {
  let enabled = unsafe { DwmIsCompositionEnabled() }.ok()?;
  if !enabled.as_bool() {
    return None;
  }

  let mut rect = RECT::default();
  unsafe {
    DwmGetWindowAttribute(
      hwnd,
      DWMWA_EXTENDED_FRAME_BOUNDS,
      core::ptr::addr_of_mut!(rect).cast(),
      std::mem::size_of::<RECT>() as u32,
    )
  }
  .ok()?;
  Some(util::from_rect(rect))
}
