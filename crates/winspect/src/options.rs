/*! Configuration for snapshot capture. */

use std::time::Duration;

const DEFAULT_ICON_PROBE_TIMEOUT_MS: u64 = 100;

/// Options controlling what a snapshot capture does beyond the mandatory
/// queries.
///
/// # Example
///
/// ```
/// use winspect::SnapshotOptions;
///
/// let options = SnapshotOptions::default().probe_icons(false);
/// assert!(!options.icons_enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "options do nothing until passed to a capture call"]
pub struct SnapshotOptions {
  probe_icons: bool,
  icon_probe_timeout: Duration,
}

impl Default for SnapshotOptions {
  fn default() -> Self {
    Self {
      probe_icons: true,
      icon_probe_timeout: Duration::from_millis(DEFAULT_ICON_PROBE_TIMEOUT_MS),
    }
  }
}

impl SnapshotOptions {
  /// Enable or disable icon probing. Default: enabled.
  ///
  /// Icon probes are the only part of a capture that messages the target
  /// window's own thread; disabling them makes a capture entirely passive.
  pub const fn probe_icons(mut self, probe: bool) -> Self {
    self.probe_icons = probe;
    self
  }

  /// Per-probe timeout for the icon message sends. Default: 100 ms.
  ///
  /// Each probe aborts early if the target thread is hung, so the timeout
  /// bounds the worst case per window, not the whole enumeration.
  pub const fn icon_probe_timeout(mut self, timeout: Duration) -> Self {
    self.icon_probe_timeout = timeout;
    self
  }

  /// Whether icon probing is enabled.
  pub const fn icons_enabled(&self) -> bool {
    self.probe_icons
  }

  /// The configured per-probe timeout.
  pub const fn icon_timeout(&self) -> Duration {
    self.icon_probe_timeout
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_options() {
    let options = SnapshotOptions::default();
    assert!(options.icons_enabled());
    assert_eq!(options.icon_timeout(), Duration::from_millis(100));
  }

  #[test]
  fn builder_overrides() {
    let options = SnapshotOptions::default()
      .probe_icons(false)
      .icon_probe_timeout(Duration::from_millis(250));
    assert!(!options.icons_enabled());
    assert_eq!(options.icon_timeout(), Duration::from_millis(250));
  }
}
