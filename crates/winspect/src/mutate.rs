/*! Live mutation of a single window.

Each operation targets one live handle and is an independent, fire-and-forget
request to the window manager: no queuing, no automatic retry. Every
operation re-checks that the target still exists immediately before acting,
so "the window is gone" ([`WinspectError::WindowGone`]) stays distinct from
"the OS refused" ([`WinspectError::Rejected`]).

Validation that needs no OS call happens first, in pure functions kept here
so the rejection rules are testable anywhere.
*/

use crate::types::{Rect, WinspectError, WinspectResult};

#[cfg(target_os = "windows")]
use crate::types::WindowHandle;

/// What a requested alpha value means for the window's layering state.
///
/// 255 is not "fully opaque layered" but "stop being layered": an opaque
/// window has no use for a separate composition surface, so the layered
/// style comes off entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlphaPlan {
  /// Remove the layered style entirely.
  RemoveLayering,
  /// Ensure the layered style is present, then apply this alpha.
  Apply(u8),
}

impl AlphaPlan {
  pub(crate) const fn for_alpha(alpha: u8) -> Self {
    if alpha == u8::MAX {
      Self::RemoveLayering
    } else {
      Self::Apply(alpha)
    }
  }
}

/// Reject resize requests with a non-positive dimension before any OS call.
pub(crate) fn validate_bounds(bounds: Rect) -> WinspectResult<()> {
  if bounds.has_positive_size() {
    Ok(())
  } else {
    Err(WinspectError::InvalidBounds {
      width: bounds.width(),
      height: bounds.height(),
    })
  }
}

/// Replace the window's title text.
#[cfg(target_os = "windows")]
pub fn set_title(handle: WindowHandle, title: &str) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::set_title(handle, title)
}

/// Move and resize the window. Width and height must be positive.
#[cfg(target_os = "windows")]
pub fn set_bounds(handle: WindowHandle, bounds: Rect) -> WinspectResult<()> {
  validate_bounds(bounds)?;
  crate::platform::ensure_alive(handle)?;
  crate::platform::set_bounds(handle, bounds)
}

/// Show or hide the window.
#[cfg(target_os = "windows")]
pub fn set_visible(handle: WindowHandle, visible: bool) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::set_visible(handle, visible);
  Ok(())
}

/// Enable or disable input to the window.
#[cfg(target_os = "windows")]
pub fn set_enabled(handle: WindowHandle, enabled: bool) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::set_enabled(handle, enabled);
  Ok(())
}

/// Pin the window above all non-topmost windows, or unpin it.
#[cfg(target_os = "windows")]
pub fn set_topmost(handle: WindowHandle, topmost: bool) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::set_topmost(handle, topmost)
}

/// Set whole-window opacity.
///
/// 255 removes the layered style (a later snapshot reports
/// `is_layered == false`); any smaller value ensures the layered style is
/// present and applies the alpha.
#[cfg(target_os = "windows")]
pub fn set_alpha(handle: WindowHandle, alpha: u8) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::set_alpha(handle, AlphaPlan::for_alpha(alpha))
}

/// Minimize the window.
#[cfg(target_os = "windows")]
pub fn minimize(handle: WindowHandle) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::minimize(handle);
  Ok(())
}

/// Maximize the window.
#[cfg(target_os = "windows")]
pub fn maximize(handle: WindowHandle) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::maximize(handle);
  Ok(())
}

/// Restore the window from the minimized or maximized state.
#[cfg(target_os = "windows")]
pub fn restore(handle: WindowHandle) -> WinspectResult<()> {
  crate::platform::ensure_alive(handle)?;
  crate::platform::restore(handle);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  mod bounds_validation {
    use super::*;

    #[test]
    fn positive_bounds_pass() {
      assert!(validate_bounds(Rect::new(10, 10, 20, 20)).is_ok());
    }

    #[test]
    fn zero_width_rejected() {
      let err = validate_bounds(Rect::new(10, 10, 10, 20)).unwrap_err();
      assert!(matches!(
        err,
        WinspectError::InvalidBounds {
          width: 0,
          height: 10
        }
      ));
    }

    #[test]
    fn zero_height_rejected() {
      assert!(validate_bounds(Rect::new(0, 0, 100, 0)).is_err());
    }

    #[test]
    fn inverted_bounds_rejected() {
      let err = validate_bounds(Rect::new(100, 100, 0, 0)).unwrap_err();
      assert!(matches!(
        err,
        WinspectError::InvalidBounds {
          width: -100,
          height: -100
        }
      ));
    }
  }

  mod alpha_plan {
    use super::*;

    #[test]
    fn opaque_removes_layering() {
      assert_eq!(AlphaPlan::for_alpha(255), AlphaPlan::RemoveLayering);
    }

    #[test]
    fn every_translucent_value_applies() {
      assert_eq!(AlphaPlan::for_alpha(0), AlphaPlan::Apply(0));
      assert_eq!(AlphaPlan::for_alpha(128), AlphaPlan::Apply(128));
      assert_eq!(AlphaPlan::for_alpha(254), AlphaPlan::Apply(254));
    }
  }
}
