/*! Heuristic window classification.

Two pure predicates over a [`WindowSnapshot`], kept side-effect-free so list
filtering stays a simple predicate composition. Both are heuristics: false
positives and negatives are expected and acceptable. The class-name lists are
load-bearing constants - changing them changes which windows a filtered view
shows, so they are reproduced exactly.
*/

use crate::types::{styles, WindowSnapshot};

/// Known shell/system window classes: the taskbars, the desktop worker
/// windows, IME windows, shell shadow/overlay windows, and the modern-app
/// host classes.
///
/// `Button` is in the list because the shell uses the generic button class
/// for its own top-level overlay windows (e.g. the Start button).
pub const SYSTEM_WINDOW_CLASSES: &[&str] = &[
  "Shell_TrayWnd",
  "Shell_SecondaryTrayWnd",
  "Progman",
  "WorkerW",
  "DV2ControlHost",
  "MsgrIMEWindowClass",
  "SysShadow",
  "Button",
  "Windows.UI.Core.CoreWindow",
  "ApplicationFrameWindow",
  "Windows.UI.Composition.DesktopWindowContentBridge",
];

/// Window classes that host modern (UWP) app content.
pub const UWP_HOST_CLASSES: &[&str] = &["ApplicationFrameWindow", "Windows.UI.Core.CoreWindow"];

/// Classify a window as belonging to the shell/system rather than a user
/// application.
///
/// True when any of:
/// - the class name is one of [`SYSTEM_WINDOW_CLASSES`] (exact match);
/// - the window has no title and the tool-window extended style;
/// - the window is a cloaked UWP host (suspended modern app).
pub fn is_system_window(snapshot: &WindowSnapshot) -> bool {
  if SYSTEM_WINDOW_CLASSES.contains(&snapshot.class_name.as_str()) {
    return true;
  }

  if snapshot.title.is_empty() && snapshot.ex_style & styles::WS_EX_TOOLWINDOW != 0 {
    return true;
  }

  snapshot.is_cloaked && snapshot.is_uwp
}

/// Classify a window as hidden from the user's point of view.
///
/// A window can be visible to the window manager yet cloaked by the
/// compositor (suspended modern apps); that counts as hidden here.
pub fn is_hidden_window(snapshot: &WindowSnapshot) -> bool {
  !snapshot.is_visible || snapshot.is_cloaked
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Rect, WindowHandle};

  fn snapshot(class_name: &str) -> WindowSnapshot {
    WindowSnapshot {
      handle: WindowHandle(1),
      parent: None,
      owner: None,
      title: "some window".into(),
      class_name: class_name.into(),
      process_id: 100.into(),
      thread_id: 200.into(),
      process_name: "app.exe".into(),
      process_path: r"C:\app\app.exe".into(),
      bounds: Rect::new(0, 0, 800, 600),
      client: Rect::new(0, 0, 784, 561),
      extended_frame: None,
      style: 0,
      ex_style: 0,
      is_visible: true,
      is_enabled: true,
      is_minimized: false,
      is_maximized: false,
      is_top_most: false,
      is_layered: false,
      is_input_transparent: false,
      is_cloaked: false,
      is_uwp: false,
      is_hung: false,
      alpha: 255,
      z_order: 0,
      icon: None,
    }
  }

  mod system_window {
    use super::*;

    #[test]
    fn every_listed_class_is_system() {
      for class in SYSTEM_WINDOW_CLASSES {
        let snap = snapshot(class);
        assert!(
          is_system_window(&snap),
          "{class} should classify as system regardless of other fields"
        );
      }
    }

    #[test]
    fn class_match_is_exact() {
      assert!(!is_system_window(&snapshot("Shell_TrayWnd2")));
      assert!(!is_system_window(&snapshot("shell_traywnd")));
      assert!(!is_system_window(&snapshot("")));
    }

    #[test]
    fn untitled_tool_window_is_system_for_any_class() {
      let mut snap = snapshot("SomeRandomClass");
      snap.title = String::new();
      snap.ex_style = styles::WS_EX_TOOLWINDOW;
      assert!(is_system_window(&snap));
    }

    #[test]
    fn titled_tool_window_is_not_system() {
      let mut snap = snapshot("SomeRandomClass");
      snap.ex_style = styles::WS_EX_TOOLWINDOW;
      assert!(!is_system_window(&snap), "has a title, so the rule is off");
    }

    #[test]
    fn untitled_non_tool_window_is_not_system() {
      let mut snap = snapshot("SomeRandomClass");
      snap.title = String::new();
      assert!(!is_system_window(&snap));
    }

    #[test]
    fn cloaked_uwp_is_system() {
      let mut snap = snapshot("SomeRandomClass");
      snap.is_cloaked = true;
      snap.is_uwp = true;
      assert!(is_system_window(&snap));
    }

    #[test]
    fn cloaked_alone_is_not_system() {
      let mut snap = snapshot("SomeRandomClass");
      snap.is_cloaked = true;
      assert!(!is_system_window(&snap));
    }
  }

  mod hidden_window {
    use super::*;

    #[test]
    fn invisible_is_hidden_regardless_of_other_fields() {
      let mut snap = snapshot("Anything");
      snap.is_visible = false;
      assert!(is_hidden_window(&snap));
    }

    #[test]
    fn cloaked_but_visible_is_hidden() {
      let mut snap = snapshot("ApplicationFrameWindow");
      snap.is_visible = true;
      snap.is_cloaked = true;
      assert!(is_hidden_window(&snap));
    }

    #[test]
    fn visible_uncloaked_is_not_hidden() {
      assert!(!is_hidden_window(&snapshot("Anything")));
    }
  }

  #[test]
  fn uwp_hosts_are_a_subset_of_system_classes() {
    for class in UWP_HOST_CLASSES {
      assert!(SYSTEM_WINDOW_CLASSES.contains(class));
    }
  }
}
