/*! Owning-process identity resolution. */

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_truncation)]

use windows::core::PWSTR;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Threading::{
  OpenProcess, QueryFullProcessImageNameW, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
};

/// Closes the process handle when dropped.
struct OwnedProcessHandle(HANDLE);

impl Drop for OwnedProcessHandle {
  fn drop(&mut self) {
    unsafe {
      let _ = CloseHandle(self.0);
    }
  }
}

/// Full image path of a process, via a limited-information handle.
///
/// `None` when the process cannot be opened - typically a protected process
/// or one that exited between the window query and this call. The failure is
/// deliberately silent beyond a debug log: the snapshot records empty
/// process identity and every window-level field stays intact.
pub(super) fn image_path(process_id: u32) -> Option<String> {
  let handle = match unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process_id) } {
    Ok(handle) => OwnedProcessHandle(handle),
    Err(error) => {
      log::debug!("cannot open process {process_id}: {error}");
      return None;
    }
  };

  let mut buffer = vec![0u16; 1024];
  let mut len = buffer.len() as u32;
  let queried = unsafe {
    QueryFullProcessImageNameW(
      handle.0,
      PROCESS_NAME_WIN32,
      PWSTR(buffer.as_mut_ptr()),
      &mut len,
    )
  };
  if let Err(error) = queried {
    log::debug!("cannot resolve image name for process {process_id}: {error}");
    return None;
  }

  Some(super::util::decode_utf16(&buffer, len as usize))
}
