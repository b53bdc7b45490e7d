/*! Window style and extended-style bit flags.

The constants mirror the window manager's 32-bit style words so that style
decoding stays usable off-platform (snapshots can be inspected anywhere).
The name tables drive [`style_names`]/[`ex_style_names`], the flag
decomposition shown in a window's property sheet.
*/

pub const WS_POPUP: u32 = 0x8000_0000;
pub const WS_CHILD: u32 = 0x4000_0000;
pub const WS_MINIMIZE: u32 = 0x2000_0000;
pub const WS_VISIBLE: u32 = 0x1000_0000;
pub const WS_DISABLED: u32 = 0x0800_0000;
pub const WS_CLIPSIBLINGS: u32 = 0x0400_0000;
pub const WS_CLIPCHILDREN: u32 = 0x0200_0000;
pub const WS_MAXIMIZE: u32 = 0x0100_0000;
pub const WS_CAPTION: u32 = 0x00C0_0000;
pub const WS_BORDER: u32 = 0x0080_0000;
pub const WS_DLGFRAME: u32 = 0x0040_0000;
pub const WS_VSCROLL: u32 = 0x0020_0000;
pub const WS_HSCROLL: u32 = 0x0010_0000;
pub const WS_SYSMENU: u32 = 0x0008_0000;
pub const WS_THICKFRAME: u32 = 0x0004_0000;
pub const WS_MINIMIZEBOX: u32 = 0x0002_0000;
pub const WS_MAXIMIZEBOX: u32 = 0x0001_0000;

pub const WS_EX_DLGMODALFRAME: u32 = 0x0000_0001;
pub const WS_EX_NOPARENTNOTIFY: u32 = 0x0000_0004;
pub const WS_EX_TOPMOST: u32 = 0x0000_0008;
pub const WS_EX_ACCEPTFILES: u32 = 0x0000_0010;
pub const WS_EX_TRANSPARENT: u32 = 0x0000_0020;
pub const WS_EX_MDICHILD: u32 = 0x0000_0040;
pub const WS_EX_TOOLWINDOW: u32 = 0x0000_0080;
pub const WS_EX_WINDOWEDGE: u32 = 0x0000_0100;
pub const WS_EX_CLIENTEDGE: u32 = 0x0000_0200;
pub const WS_EX_CONTEXTHELP: u32 = 0x0000_0400;
pub const WS_EX_RIGHT: u32 = 0x0000_1000;
pub const WS_EX_RTLREADING: u32 = 0x0000_2000;
pub const WS_EX_LEFTSCROLLBAR: u32 = 0x0000_4000;
pub const WS_EX_CONTROLPARENT: u32 = 0x0001_0000;
pub const WS_EX_STATICEDGE: u32 = 0x0002_0000;
pub const WS_EX_APPWINDOW: u32 = 0x0004_0000;
pub const WS_EX_LAYERED: u32 = 0x0008_0000;
pub const WS_EX_NOINHERITLAYOUT: u32 = 0x0010_0000;
pub const WS_EX_NOREDIRECTIONBITMAP: u32 = 0x0020_0000;
pub const WS_EX_LAYOUTRTL: u32 = 0x0040_0000;
pub const WS_EX_COMPOSITED: u32 = 0x0200_0000;
pub const WS_EX_NOACTIVATE: u32 = 0x0800_0000;

/// Style bit -> name table, in the order the property sheet lists them.
const STYLE_NAMES: &[(u32, &str)] = &[
  (WS_POPUP, "WS_POPUP"),
  (WS_CHILD, "WS_CHILD"),
  (WS_MINIMIZE, "WS_MINIMIZE"),
  (WS_VISIBLE, "WS_VISIBLE"),
  (WS_DISABLED, "WS_DISABLED"),
  (WS_CLIPSIBLINGS, "WS_CLIPSIBLINGS"),
  (WS_CLIPCHILDREN, "WS_CLIPCHILDREN"),
  (WS_MAXIMIZE, "WS_MAXIMIZE"),
  (WS_CAPTION, "WS_CAPTION"),
  (WS_BORDER, "WS_BORDER"),
  (WS_DLGFRAME, "WS_DLGFRAME"),
  (WS_VSCROLL, "WS_VSCROLL"),
  (WS_HSCROLL, "WS_HSCROLL"),
  (WS_SYSMENU, "WS_SYSMENU"),
  (WS_THICKFRAME, "WS_THICKFRAME"),
  (WS_MINIMIZEBOX, "WS_MINIMIZEBOX"),
  (WS_MAXIMIZEBOX, "WS_MAXIMIZEBOX"),
];

/// Extended-style bit -> name table.
const EX_STYLE_NAMES: &[(u32, &str)] = &[
  (WS_EX_DLGMODALFRAME, "WS_EX_DLGMODALFRAME"),
  (WS_EX_NOPARENTNOTIFY, "WS_EX_NOPARENTNOTIFY"),
  (WS_EX_TOPMOST, "WS_EX_TOPMOST"),
  (WS_EX_ACCEPTFILES, "WS_EX_ACCEPTFILES"),
  (WS_EX_TRANSPARENT, "WS_EX_TRANSPARENT"),
  (WS_EX_MDICHILD, "WS_EX_MDICHILD"),
  (WS_EX_TOOLWINDOW, "WS_EX_TOOLWINDOW"),
  (WS_EX_WINDOWEDGE, "WS_EX_WINDOWEDGE"),
  (WS_EX_CLIENTEDGE, "WS_EX_CLIENTEDGE"),
  (WS_EX_CONTEXTHELP, "WS_EX_CONTEXTHELP"),
  (WS_EX_RIGHT, "WS_EX_RIGHT"),
  (WS_EX_RTLREADING, "WS_EX_RTLREADING"),
  (WS_EX_LEFTSCROLLBAR, "WS_EX_LEFTSCROLLBAR"),
  (WS_EX_CONTROLPARENT, "WS_EX_CONTROLPARENT"),
  (WS_EX_STATICEDGE, "WS_EX_STATICEDGE"),
  (WS_EX_APPWINDOW, "WS_EX_APPWINDOW"),
  (WS_EX_LAYERED, "WS_EX_LAYERED"),
  (WS_EX_NOINHERITLAYOUT, "WS_EX_NOINHERITLAYOUT"),
  (WS_EX_NOREDIRECTIONBITMAP, "WS_EX_NOREDIRECTIONBITMAP"),
  (WS_EX_LAYOUTRTL, "WS_EX_LAYOUTRTL"),
  (WS_EX_COMPOSITED, "WS_EX_COMPOSITED"),
  (WS_EX_NOACTIVATE, "WS_EX_NOACTIVATE"),
];

fn names_for(bits: u32, table: &'static [(u32, &'static str)]) -> Vec<&'static str> {
  table
    .iter()
    .filter(|(flag, _)| bits & flag != 0)
    .map(|&(_, name)| name)
    .collect()
}

/// Decode a raw style word into the names of the set flags.
pub fn style_names(style: u32) -> Vec<&'static str> {
  names_for(style, STYLE_NAMES)
}

/// Decode a raw extended-style word into the names of the set flags.
pub fn ex_style_names(ex_style: u32) -> Vec<&'static str> {
  names_for(ex_style, EX_STYLE_NAMES)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero_style_decodes_to_nothing() {
    assert!(style_names(0).is_empty());
    assert!(ex_style_names(0).is_empty());
  }

  #[test]
  fn overlapped_window_styles() {
    let style = WS_VISIBLE | WS_CAPTION | WS_SYSMENU | WS_THICKFRAME;
    let names = style_names(style);
    assert!(names.contains(&"WS_VISIBLE"));
    assert!(names.contains(&"WS_CAPTION"));
    assert!(names.contains(&"WS_SYSMENU"));
    assert!(names.contains(&"WS_THICKFRAME"));
    assert!(!names.contains(&"WS_POPUP"));
  }

  #[test]
  fn caption_is_a_composite_flag() {
    // WS_CAPTION = WS_BORDER | WS_DLGFRAME; either sub-bit lights it up.
    let names = style_names(WS_BORDER);
    assert!(names.contains(&"WS_CAPTION"));
    assert!(names.contains(&"WS_BORDER"));
  }

  #[test]
  fn ex_style_decode() {
    let names = ex_style_names(WS_EX_TOPMOST | WS_EX_LAYERED | WS_EX_TOOLWINDOW);
    assert_eq!(
      names,
      vec!["WS_EX_TOPMOST", "WS_EX_TOOLWINDOW", "WS_EX_LAYERED"],
      "names come out in table order"
    );
  }

  #[test]
  fn decode_order_matches_table_order() {
    let all = style_names(u32::MAX);
    assert_eq!(all.len(), 17);
    assert_eq!(all.first(), Some(&"WS_POPUP"));
    assert_eq!(all.last(), Some(&"WS_MAXIMIZEBOX"));
  }
}
