/*! Top-level window enumeration.

The window manager walks its top-level window list front-to-back and hands
each handle to a callback; one snapshot is built per handle. The raw walk
order *is* the z-order signal, so the index pass afterwards just writes it
down. Order is only meaningful within a single call - windows are created,
destroyed, and restacked between calls, and callers wanting identity across
refreshes must correlate by handle (see [`crate::WindowStore`]).
*/

use crate::types::WindowSnapshot;
#[cfg(target_os = "windows")]
use crate::types::WinspectResult;
#[cfg(target_os = "windows")]
use crate::SnapshotOptions;

/// Enumerate all top-level windows, front to back, with default options.
///
/// One snapshot per window the OS chose to report at call time. Per-window
/// query failures degrade to field defaults and never interrupt the walk;
/// only a failure of the enumeration primitive itself is an error, and it is
/// fatal to this call only.
#[cfg(target_os = "windows")]
pub fn enumerate_windows() -> WinspectResult<Vec<WindowSnapshot>> {
  enumerate_windows_with(&SnapshotOptions::default())
}

/// Enumerate all top-level windows with explicit capture options.
#[cfg(target_os = "windows")]
pub fn enumerate_windows_with(options: &SnapshotOptions) -> WinspectResult<Vec<WindowSnapshot>> {
  let mut windows = crate::platform::enumerate_windows(options)?;
  assign_z_order(&mut windows);
  Ok(windows)
}

/// Capture a single window by handle, without enumerating.
///
/// The handle is assumed valid at call time; if it goes stale mid-capture the
/// remaining queries return zeroed defaults rather than failing.
#[cfg(target_os = "windows")]
pub fn snapshot_window(
  handle: crate::types::WindowHandle,
  options: &SnapshotOptions,
) -> WindowSnapshot {
  crate::platform::snapshot_window(handle, options)
}

/// Assign `z_order` = position in the sequence (0 = frontmost).
///
/// Overwrites whatever the field held: the sequence order is authoritative.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn assign_z_order(windows: &mut [WindowSnapshot]) {
  for (index, window) in windows.iter_mut().enumerate() {
    window.z_order = index as u32;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{RawWindowState, WindowHandle};

  fn snapshots(handles: &[isize]) -> Vec<WindowSnapshot> {
    handles
      .iter()
      .map(|&h| {
        WindowSnapshot::from_raw(
          WindowHandle(h),
          RawWindowState {
            title: format!("window {h}"),
            visible: true,
            enabled: true,
            ..RawWindowState::default()
          },
        )
      })
      .collect()
  }

  #[test]
  fn z_order_equals_sequence_index() {
    let mut windows = snapshots(&[30, 10, 20]);
    assign_z_order(&mut windows);
    let orders: Vec<u32> = windows.iter().map(|w| w.z_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
  }

  #[test]
  fn empty_sequence_is_fine() {
    let mut windows = snapshots(&[]);
    assign_z_order(&mut windows);
    assert!(windows.is_empty());
  }

  #[test]
  fn reassignment_overwrites_stale_indices() {
    let mut windows = snapshots(&[1, 2, 3]);
    assign_z_order(&mut windows);
    windows.remove(1);
    assign_z_order(&mut windows);
    let orders: Vec<u32> = windows.iter().map(|w| w.z_order).collect();
    assert_eq!(orders, vec![0, 1], "no gap left by the removed window");
  }
}

#[cfg(test)]
mod proptests {
  use super::*;
  use crate::types::{RawWindowState, WindowHandle};
  use proptest::prelude::*;

  proptest! {
    /// z-order values are exactly 0..n with no gaps or duplicates, for any
    /// sequence length and any pre-existing values in the field.
    #[test]
    fn z_orders_are_dense_and_unique(handles in proptest::collection::vec(any::<isize>(), 0..64), stale in any::<u32>()) {
      let mut windows: Vec<WindowSnapshot> = handles
        .iter()
        .map(|&h| {
          let mut s = WindowSnapshot::from_raw(WindowHandle(h), RawWindowState::default());
          s.z_order = stale;
          s
        })
        .collect();
      assign_z_order(&mut windows);
      for (index, window) in windows.iter().enumerate() {
        prop_assert_eq!(window.z_order as usize, index);
      }
    }
  }
}
