/*! Holder for the most recent enumeration result.

Enumeration is synchronous and must not overlap itself (there is no
cancellation for an in-progress walk), so the store gates refreshes through a
`try_lock`: a second refresh arriving while one is running gets
[`WinspectError::RefreshInProgress`] instead of a second walk. Timer-driven
callers get the single-flight discipline for free.

The store never persists anything: each successful refresh replaces the whole
sequence, and handle lookups answer from whatever the last refresh saw.
*/

use parking_lot::Mutex;

use crate::enumerate::assign_z_order;
use crate::types::{WindowHandle, WindowSnapshot, WinspectError, WinspectResult};

/// Latest-enumeration store with handle correlation and refresh gating.
#[derive(Debug, Default)]
pub struct WindowStore {
  windows: Mutex<Vec<WindowSnapshot>>,
  /// Held for the duration of a refresh. Never locked while `windows` is.
  refresh_gate: Mutex<()>,
}

impl WindowStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Refresh from the live window list. See [`Self::refresh_with`].
  #[cfg(target_os = "windows")]
  pub fn refresh(&self) -> WinspectResult<usize> {
    self.refresh_with(crate::enumerate::enumerate_windows)
  }

  /// Refresh the store from any snapshot source, re-deriving z-order from
  /// sequence position.
  ///
  /// Only one refresh runs at a time; an overlapping call fails fast with
  /// [`WinspectError::RefreshInProgress`] without touching the stored
  /// sequence. A failed fetch also leaves the previous sequence in place.
  pub fn refresh_with<F>(&self, fetch: F) -> WinspectResult<usize>
  where
    F: FnOnce() -> WinspectResult<Vec<WindowSnapshot>>,
  {
    let _gate = self
      .refresh_gate
      .try_lock()
      .ok_or(WinspectError::RefreshInProgress)?;

    let mut fresh = fetch()?;
    assign_z_order(&mut fresh);
    let count = fresh.len();
    *self.windows.lock() = fresh;
    Ok(count)
  }

  /// Look up a window by handle in the last refresh.
  ///
  /// `None` means the window was closed, or was not top-level, at the time of
  /// the last refresh - not that it never existed.
  pub fn find(&self, handle: WindowHandle) -> Option<WindowSnapshot> {
    self.windows.lock().iter().find(|w| w.handle == handle).cloned()
  }

  /// Clone the full snapshot sequence from the last refresh, in z-order.
  pub fn snapshots(&self) -> Vec<WindowSnapshot> {
    self.windows.lock().clone()
  }

  /// Number of windows seen by the last refresh.
  pub fn len(&self) -> usize {
    self.windows.lock().len()
  }

  /// True before the first successful refresh, or when the last refresh saw
  /// no windows.
  pub fn is_empty(&self) -> bool {
    self.windows.lock().is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::RawWindowState;

  fn synthetic(handles: &[isize]) -> Vec<WindowSnapshot> {
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
  fn refresh_assigns_dense_z_order() {
    let store = WindowStore::new();
    let count = store.refresh_with(|| Ok(synthetic(&[0xa, 0xb, 0xc]))).unwrap();
    assert_eq!(count, 3);

    let snaps = store.snapshots();
    let orders: Vec<u32> = snaps.iter().map(|w| w.z_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
  }

  #[test]
  fn destroyed_window_disappears_on_next_refresh() {
    // Three windows stacked A (top), B, C (bottom).
    let store = WindowStore::new();
    store.refresh_with(|| Ok(synthetic(&[0xa, 0xb, 0xc]))).unwrap();
    assert!(store.find(WindowHandle(0xb)).is_some());

    // B is destroyed between refreshes.
    store.refresh_with(|| Ok(synthetic(&[0xa, 0xc]))).unwrap();

    let snaps = store.snapshots();
    let handles: Vec<WindowHandle> = snaps.iter().map(|w| w.handle).collect();
    assert_eq!(handles, vec![WindowHandle(0xa), WindowHandle(0xc)]);
    let orders: Vec<u32> = snaps.iter().map(|w| w.z_order).collect();
    assert_eq!(orders, vec![0, 1], "z-order re-derived without a gap");
    assert!(
      store.find(WindowHandle(0xb)).is_none(),
      "stale handle no longer resolves"
    );
  }

  #[test]
  fn failed_fetch_keeps_previous_sequence() {
    let store = WindowStore::new();
    store.refresh_with(|| Ok(synthetic(&[1, 2]))).unwrap();

    let err = store
      .refresh_with(|| {
        Err(WinspectError::EnumerationFailed {
          code: 8,
          message: "out of resources".into(),
        })
      })
      .unwrap_err();
    assert!(matches!(err, WinspectError::EnumerationFailed { .. }));
    assert_eq!(store.len(), 2, "stored sequence untouched by the failure");
  }

  #[test]
  fn overlapping_refresh_is_refused() {
    let store = WindowStore::new();
    // Re-enter refresh_with from inside the fetch closure to simulate a
    // second caller arriving mid-walk.
    let result = store.refresh_with(|| {
      let nested = store.refresh_with(|| Ok(synthetic(&[9])));
      assert!(matches!(nested, Err(WinspectError::RefreshInProgress)));
      Ok(synthetic(&[1]))
    });
    assert!(result.is_ok());
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn empty_store_before_first_refresh() {
    let store = WindowStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.find(WindowHandle(1)).is_none());
  }
}
