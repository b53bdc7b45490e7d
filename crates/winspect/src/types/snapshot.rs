/*! The window snapshot record and the raw-state merge that produces it.

A snapshot is a point-in-time copy of everything the window manager, the
process subsystem, and the compositor report about one top-level window.
The live window may be destroyed, moved, or restyled at any moment after
capture; nothing in the record is guaranteed to still be accurate.

The platform layer fills a [`RawWindowState`] - one field per OS query, each
already resolved to its documented default if the query failed - and
[`WindowSnapshot::from_raw`] applies the derivation rules. Keeping the merge
pure means every normalization rule is unit-testable without a window manager.
*/

use serde::{Deserialize, Serialize};

use super::styles;
use super::{IconHandle, ProcessId, Rect, ThreadId, WindowHandle};
use crate::classify::UWP_HOST_CLASSES;

/// A top-level window's state, captured at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
  pub handle: WindowHandle,
  /// Parent in the window hierarchy. Top-level windows normally have none.
  pub parent: Option<WindowHandle>,
  /// Owner window (ownership relation, not memory ownership).
  pub owner: Option<WindowHandle>,
  pub title: String,
  pub class_name: String,
  pub process_id: ProcessId,
  pub thread_id: ThreadId,
  /// Executable name of the owning process. Empty if the process could not
  /// be opened (protected process, or it exited mid-capture).
  pub process_name: String,
  /// Full executable path. Empty under the same conditions as `process_name`.
  pub process_path: String,
  /// Window rectangle in screen coordinates.
  pub bounds: Rect,
  /// Client-area rectangle.
  pub client: Rect,
  /// Compositor-reported visual bounds. Absent when composition is off or
  /// the compositor declined to answer.
  pub extended_frame: Option<Rect>,
  /// Raw style bits. Decode with [`WindowSnapshot::style_names`].
  pub style: u32,
  /// Raw extended-style bits.
  pub ex_style: u32,
  pub is_visible: bool,
  pub is_enabled: bool,
  pub is_minimized: bool,
  pub is_maximized: bool,
  pub is_top_most: bool,
  pub is_layered: bool,
  /// Window lets mouse input pass through to whatever is underneath.
  pub is_input_transparent: bool,
  /// Hidden by the compositor even though the window itself claims to be
  /// visible (suspended modern apps, transition animations).
  pub is_cloaked: bool,
  /// Class name matches one of the known modern-app host classes.
  pub is_uwp: bool,
  /// The window's UI thread is not responding.
  pub is_hung: bool,
  /// Whole-window opacity. Only meaningful when `is_layered`; forced to 255
  /// (opaque) otherwise.
  pub alpha: u8,
  /// Position in the enumeration's front-to-back order. 0 = frontmost.
  pub z_order: u32,
  /// Best-effort icon resource. Absent if every probe came up empty.
  pub icon: Option<IconHandle>,
}

/// One field per OS query, resolved by the platform layer.
///
/// Every field already carries its failure default: a query that could not be
/// answered is indistinguishable here from one that answered with the
/// default. Snapshot building never fails, it degrades.
#[derive(Debug, Default, Clone)]
pub(crate) struct RawWindowState {
  pub parent: Option<WindowHandle>,
  pub owner: Option<WindowHandle>,
  pub title: String,
  pub class_name: String,
  pub process_id: u32,
  pub thread_id: u32,
  /// Full image path of the owning process, `None` if the limited-information
  /// open failed.
  pub process_image: Option<String>,
  pub bounds: Rect,
  pub client: Rect,
  pub style: u32,
  pub ex_style: u32,
  pub visible: bool,
  pub enabled: bool,
  pub minimized: bool,
  pub maximized: bool,
  pub cloaked: bool,
  pub hung: bool,
  /// Alpha reported by the layered-attributes query, `None` when the query
  /// failed or did not include an alpha component. Ignored entirely for
  /// non-layered windows.
  pub layered_alpha: Option<u8>,
  pub icon: Option<IconHandle>,
  pub extended_frame: Option<Rect>,
}

impl WindowSnapshot {
  /// Merge a raw state record into a normalized snapshot.
  ///
  /// `z_order` starts at 0 and is overwritten by the enumerator once the
  /// full sequence is known.
  pub(crate) fn from_raw(handle: WindowHandle, raw: RawWindowState) -> Self {
    let is_layered = raw.ex_style & styles::WS_EX_LAYERED != 0;
    let (process_name, process_path) = split_process_image(raw.process_image);

    Self {
      handle,
      parent: raw.parent,
      owner: raw.owner,
      is_uwp: UWP_HOST_CLASSES.contains(&raw.class_name.as_str()),
      title: raw.title,
      class_name: raw.class_name,
      process_id: ProcessId(raw.process_id),
      thread_id: ThreadId(raw.thread_id),
      process_name,
      process_path,
      bounds: raw.bounds,
      client: raw.client,
      extended_frame: raw.extended_frame,
      style: raw.style,
      ex_style: raw.ex_style,
      is_visible: raw.visible,
      is_enabled: raw.enabled,
      is_minimized: raw.minimized,
      is_maximized: raw.maximized,
      is_top_most: raw.ex_style & styles::WS_EX_TOPMOST != 0,
      is_layered,
      is_input_transparent: raw.ex_style & styles::WS_EX_TRANSPARENT != 0,
      is_cloaked: raw.cloaked,
      is_hung: raw.hung,
      alpha: if is_layered {
        raw.layered_alpha.unwrap_or(u8::MAX)
      } else {
        u8::MAX
      },
      z_order: 0,
      icon: raw.icon,
    }
  }

  /// Names of the set style flags.
  pub fn style_names(&self) -> Vec<&'static str> {
    styles::style_names(self.style)
  }

  /// Names of the set extended-style flags.
  pub fn ex_style_names(&self) -> Vec<&'static str> {
    styles::ex_style_names(self.ex_style)
  }
}

/// Split a full process image path into (executable name, full path).
/// Both empty when the path is unavailable.
fn split_process_image(image: Option<String>) -> (String, String) {
  match image {
    Some(path) => {
      let name = path
        .rsplit(['\\', '/'])
        .next()
        .unwrap_or(path.as_str())
        .to_owned();
      (name, path)
    }
    None => (String::new(), String::new()),
  }
}
