/*!
winspect - top-level window enumeration, inspection, and live editing.

```ignore
use winspect::{enumerate_windows, is_hidden_window, is_system_window, WindowStore};

// One-shot: every top-level window, front to back.
let windows = enumerate_windows()?;
for w in windows.iter().filter(|w| !is_system_window(w) && !is_hidden_window(w)) {
    println!("{} {:5} {}", w.handle, w.process_id, w.title);
}

// Or keep a store around and correlate across refreshes by handle.
let store = WindowStore::new();
store.refresh()?;
let target = store.snapshots().into_iter().find(|w| w.title.contains("Notepad"));

// Live edits against a handle.
if let Some(w) = target {
    winspect::mutate::set_alpha(w.handle, 200)?;
    winspect::mutate::set_topmost(w.handle, true)?;
}
```

Snapshots are point-in-time copies: nothing in a record is guaranteed to
still be true by the time it is read, and mutations re-check liveness before
acting. Per-attribute query failures (protected processes, an absent
compositor, hung windows) degrade to documented defaults instead of erroring;
see [`WindowSnapshot`] for the field-level rules.
*/

mod classify;
mod enumerate;
pub mod mutate;
mod options;
#[cfg(target_os = "windows")]
mod platform;
mod store;
mod types;

pub use types::*;

pub use classify::{is_hidden_window, is_system_window, SYSTEM_WINDOW_CLASSES, UWP_HOST_CLASSES};
pub use options::SnapshotOptions;
pub use store::WindowStore;

#[cfg(target_os = "windows")]
pub use enumerate::{enumerate_windows, enumerate_windows_with, snapshot_window};
