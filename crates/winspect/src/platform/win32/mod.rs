/*!
Win32 backend.

All OS access lives under this module. The split mirrors the failure
policies: `query` (and its helpers `process` and `icon`) absorb every failure
locally and hand back defaults, `enumerate` can fail only catastrophically,
and `mutate` reports whole-operation outcomes.
*/

mod enumerate;
mod icon;
mod mutate;
mod process;
mod query;
mod util;

pub(crate) use enumerate::enumerate_windows;
pub(crate) use mutate::{
  ensure_alive, maximize, minimize, restore, set_alpha, set_bounds, set_enabled, set_title,
  set_topmost, set_visible,
};

use crate::types::{WindowHandle, WindowSnapshot};
use crate::SnapshotOptions;

/// Capture one window into a normalized snapshot.
pub(crate) fn snapshot_window(handle: WindowHandle, options: &SnapshotOptions) -> WindowSnapshot {
  WindowSnapshot::from_raw(handle, query::read_window_state(handle, options))
}
