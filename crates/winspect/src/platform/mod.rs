/*!
Platform backends.

Core code never touches OS types directly: the platform module exposes a
small set of crate-internal functions over crate types, and everything above
it is OS-free and unit-testable. There is one backend - this is an inspector
for the Windows windowing subsystem.
*/

#[cfg(target_os = "windows")]
mod win32;

#[cfg(target_os = "windows")]
pub(crate) use win32::{
  enumerate_windows, ensure_alive, maximize, minimize, restore, set_alpha, set_bounds,
  set_enabled, set_title, set_topmost, set_visible, snapshot_window,
};
