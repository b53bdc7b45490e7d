/*! Error types for winspect operations.

Per-attribute failures during snapshot building never surface here - they
degrade to field defaults (see `RawWindowState`). Only whole-operation
outcomes are errors.
*/

use super::WindowHandle;

/// Errors that can occur during winspect operations.
#[derive(Debug, thiserror::Error)]
pub enum WinspectError {
  /// The target window was destroyed between capture and the operation.
  /// Distinct from [`WinspectError::Rejected`]: the OS was never asked.
  #[error("window {0} no longer exists")]
  WindowGone(WindowHandle),

  /// A resize request with a non-positive dimension, rejected before any OS
  /// call is made.
  #[error("invalid bounds: width and height must be positive (got {width}x{height})")]
  InvalidBounds { width: i32, height: i32 },

  /// The OS refused a mutation. Carries the OS-provided error code; the
  /// operation is never retried automatically.
  #[error("operation rejected by the window manager (code {code}): {message}")]
  Rejected { code: i32, message: String },

  /// The window enumeration primitive itself failed. Fatal to that single
  /// enumeration call only.
  #[error("window enumeration failed (code {code}): {message}")]
  EnumerationFailed { code: i32, message: String },

  /// A refresh was requested while another refresh was still running.
  /// Overlapping enumerations are not a supported state.
  #[error("a window refresh is already in progress")]
  RefreshInProgress,
}

/// Result type for winspect operations.
pub type WinspectResult<T> = Result<T, WinspectError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn window_gone_names_the_handle() {
    let err = WinspectError::WindowGone(WindowHandle(0xbeef));
    assert_eq!(err.to_string(), "window 0xbeef no longer exists");
  }

  #[test]
  fn invalid_bounds_reports_dimensions() {
    let err = WinspectError::InvalidBounds {
      width: 0,
      height: 240,
    };
    assert!(err.to_string().contains("0x240"));
  }
}
