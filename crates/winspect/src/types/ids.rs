/*! Branded ID types for OS-level identifiers. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Opaque window handle (`HWND` on Windows), stored as the pointer value.
///
/// A handle is only a name for a window that existed at capture time; the
/// window may be destroyed at any point afterwards. Liveness is re-checked
/// before every mutation.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[display("{_0:#x}")]
pub struct WindowHandle(pub isize);

impl WindowHandle {
  /// The null handle. Used by the OS to mean "no window".
  pub const NULL: Self = Self(0);

  /// True for the null handle.
  pub const fn is_null(self) -> bool {
    self.0 == 0
  }
}

/// Opaque icon resource handle (`HICON` on Windows).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[display("{_0:#x}")]
pub struct IconHandle(pub isize);

/// Process ID - branded type to distinguish from other u32 values.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct ProcessId(pub u32);

/// Thread ID of the thread that created a window.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
pub struct ThreadId(pub u32);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_handle() {
    assert!(WindowHandle::NULL.is_null());
    assert!(!WindowHandle(0x1a2b4).is_null());
  }

  #[test]
  fn handles_display_as_hex() {
    assert_eq!(WindowHandle(0x1a2b4).to_string(), "0x1a2b4");
    assert_eq!(IconHandle(0xff).to_string(), "0xff");
  }

  #[test]
  fn pid_displays_as_decimal() {
    assert_eq!(ProcessId(4312).to_string(), "4312");
  }
}
