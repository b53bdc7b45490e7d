/*!
Command-line front-end for winspect.

Thin by design: every listing is a filter over the library's snapshot
sequence and every edit maps one subcommand to one mutation call. Anything
resembling logic belongs in the `winspect` crate.
*/

use clap::{Parser, Subcommand};

/// Inspect and edit top-level windows.
#[derive(Parser, Debug)]
#[command(name = "winspect", version, about)]
struct Args {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List top-level windows in z-order (default).
  List {
    /// Include windows classified as hidden.
    #[arg(long)]
    hidden: bool,

    /// Include windows classified as system/shell windows.
    #[arg(long)]
    system: bool,

    /// Emit the full snapshot records as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Show the full property sheet for one window.
  Show {
    /// Window handle, decimal or 0x-prefixed hex.
    handle: String,

    /// Emit the snapshot record as JSON.
    #[arg(long)]
    json: bool,
  },

  /// Replace a window's title text.
  SetTitle { handle: String, title: String },

  /// Move and resize a window.
  SetBounds {
    handle: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
  },

  /// Set whole-window opacity (0-255; 255 removes layering).
  SetAlpha { handle: String, alpha: u8 },

  /// Pin a window above all non-topmost windows, or unpin it.
  SetTopmost {
    handle: String,
    #[arg(action = clap::ArgAction::Set)]
    topmost: bool,
  },

  /// Show or hide a window.
  SetVisible {
    handle: String,
    #[arg(action = clap::ArgAction::Set)]
    visible: bool,
  },

  /// Enable or disable input to a window.
  SetEnabled {
    handle: String,
    #[arg(action = clap::ArgAction::Set)]
    enabled: bool,
  },

  /// Minimize a window.
  Minimize { handle: String },

  /// Maximize a window.
  Maximize { handle: String },

  /// Restore a window from the minimized or maximized state.
  Restore { handle: String },
}

#[cfg(target_os = "windows")]
fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = Args::parse();
  let command = args.command.unwrap_or(Command::List {
    hidden: false,
    system: false,
    json: false,
  });

  if let Err(error) = run(command) {
    eprintln!("error: {error}");
    std::process::exit(1);
  }
}

#[cfg(not(target_os = "windows"))]
fn main() {
  let _ = Args::parse();
  eprintln!("winspect inspects the Windows windowing subsystem and only runs on Windows");
  std::process::exit(1);
}

#[cfg(target_os = "windows")]
fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
  use winspect::{is_hidden_window, is_system_window};

  match command {
    Command::List {
      hidden,
      system,
      json,
    } => {
      let windows = winspect::enumerate_windows()?;
      let selected: Vec<_> = windows
        .into_iter()
        .filter(|w| hidden || !is_hidden_window(w))
        .filter(|w| system || !is_system_window(w))
        .collect();

      if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
      } else {
        println!(
          "{:>3}  {:<14} {:>6}  {:<20} {}",
          "z", "handle", "pid", "process", "title"
        );
        for w in &selected {
          println!(
            "{:>3}  {:<14} {:>6}  {:<20} {}",
            w.z_order,
            w.handle.to_string(),
            w.process_id.to_string(),
            w.process_name,
            w.title
          );
        }
        log::info!("{} windows listed", selected.len());
      }
    }

    Command::Show { handle, json } => {
      let handle = parse_handle(&handle)?;
      let snapshot = winspect::snapshot_window(handle, &winspect::SnapshotOptions::default());
      if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
      } else {
        print_sheet(&snapshot);
      }
    }

    Command::SetTitle { handle, title } => {
      winspect::mutate::set_title(parse_handle(&handle)?, &title)?;
    }

    Command::SetBounds {
      handle,
      x,
      y,
      width,
      height,
    } => {
      let bounds = winspect::Rect::new(x, y, x + width, y + height);
      winspect::mutate::set_bounds(parse_handle(&handle)?, bounds)?;
    }

    Command::SetAlpha { handle, alpha } => {
      winspect::mutate::set_alpha(parse_handle(&handle)?, alpha)?;
    }

    Command::SetTopmost { handle, topmost } => {
      winspect::mutate::set_topmost(parse_handle(&handle)?, topmost)?;
    }

    Command::SetVisible { handle, visible } => {
      winspect::mutate::set_visible(parse_handle(&handle)?, visible)?;
    }

    Command::SetEnabled { handle, enabled } => {
      winspect::mutate::set_enabled(parse_handle(&handle)?, enabled)?;
    }

    Command::Minimize { handle } => winspect::mutate::minimize(parse_handle(&handle)?)?,
    Command::Maximize { handle } => winspect::mutate::maximize(parse_handle(&handle)?)?,
    Command::Restore { handle } => winspect::mutate::restore(parse_handle(&handle)?)?,
  }

  Ok(())
}

/// Accept handles the way the OS prints them: decimal or 0x-prefixed hex.
#[cfg(target_os = "windows")]
fn parse_handle(text: &str) -> Result<winspect::WindowHandle, String> {
  let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
    Some(hex) => isize::from_str_radix(hex, 16),
    None => text.parse(),
  };
  parsed
    .map(winspect::WindowHandle)
    .map_err(|_| format!("not a window handle: {text}"))
}

#[cfg(target_os = "windows")]
fn print_sheet(w: &winspect::WindowSnapshot) {
  use winspect::{is_hidden_window, is_system_window};

  fn yes_no(value: bool) -> &'static str {
    if value {
      "yes"
    } else {
      "no"
    }
  }

  fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
      "(unknown)"
    } else {
      value
    }
  }

  println!("handle            {}", w.handle);
  println!(
    "parent            {}",
    w.parent.map_or_else(|| "-".into(), |h| h.to_string())
  );
  println!(
    "owner             {}",
    w.owner.map_or_else(|| "-".into(), |h| h.to_string())
  );
  println!("title             {}", if w.title.is_empty() { "(empty)" } else { &w.title });
  println!("class             {}", w.class_name);
  println!("process id        {}", w.process_id);
  println!("thread id         {}", w.thread_id);
  println!("process name      {}", or_unknown(&w.process_name));
  println!("process path      {}", or_unknown(&w.process_path));
  println!(
    "bounds            ({}, {}) - ({}, {})  {}x{}",
    w.bounds.left,
    w.bounds.top,
    w.bounds.right,
    w.bounds.bottom,
    w.bounds.width(),
    w.bounds.height()
  );
  println!(
    "client            {}x{}",
    w.client.width(),
    w.client.height()
  );
  if let Some(frame) = w.extended_frame {
    println!(
      "extended frame    ({}, {}) - ({}, {})",
      frame.left, frame.top, frame.right, frame.bottom
    );
  }
  println!("style             {:#010x}  {}", w.style, w.style_names().join(" | "));
  println!(
    "ex style          {:#010x}  {}",
    w.ex_style,
    w.ex_style_names().join(" | ")
  );
  println!("visible           {}", yes_no(w.is_visible));
  println!("enabled           {}", yes_no(w.is_enabled));
  println!("minimized         {}", yes_no(w.is_minimized));
  println!("maximized         {}", yes_no(w.is_maximized));
  println!("topmost           {}", yes_no(w.is_top_most));
  println!("cloaked           {}", yes_no(w.is_cloaked));
  println!("uwp host          {}", yes_no(w.is_uwp));
  println!("hung              {}", yes_no(w.is_hung));
  if w.is_layered {
    println!(
      "layered           yes, alpha {} ({:.1}%)",
      w.alpha,
      f64::from(w.alpha) / 255.0 * 100.0
    );
    println!("input transparent {}", yes_no(w.is_input_transparent));
  }
  println!("z-order           {}", w.z_order);
  println!(
    "icon              {}",
    w.icon.map_or_else(|| "-".into(), |i| i.to_string())
  );
  println!("system window     {}", yes_no(is_system_window(w)));
  println!("hidden window     {}", yes_no(is_hidden_window(w)));
}
