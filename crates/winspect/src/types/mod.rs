/*! Core types for winspect. */

#![allow(missing_docs)]

mod error;
mod geometry;
mod ids;
mod snapshot;
pub mod styles;

pub use error::{WinspectError, WinspectResult};
pub use geometry::Rect;
pub use ids::{IconHandle, ProcessId, ThreadId, WindowHandle};
pub(crate) use snapshot::RawWindowState;
pub use snapshot::WindowSnapshot;
