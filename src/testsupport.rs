//! Shared test fixtures: scratch state directories and recording fakes for the shell
//! and the session broadcaster.

use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::color::Color;
use crate::error::ShellInteropError;
use crate::notify::SettingBroadcaster;
use crate::shell::DesktopBackground;

static NEXT_SCRATCH: AtomicUsize = AtomicUsize::new(0);

/// Per-test directory holding a simulated preference state file. Removed on
/// drop.
#[derive(Debug)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let n = NEXT_SCRATCH.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir()
            .join("themeflip-tests")
            .join(format!("{label}-{}-{n}", std::process::id()));
        // Leftovers from a crashed run with the same pid.
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).expect("create scratch dir");
        Self { root }
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Where the simulated platform keeps its state in these tests.
    pub fn state_file(&self) -> PathBuf {
        self.join("state.toml")
    }

    /// Pre-populate the state file with raw text and return its path.
    pub fn seed_state(&self, contents: &str) -> PathBuf {
        let path = self.state_file();
        fs::write(&path, contents).expect("seed state file");
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// Mutating call observed by [`RecordingDesktop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopCall {
    ClearWallpaper,
    SetColor(Color),
}

/// Desktop fake that records mutations and can reject one named call.
#[derive(Debug)]
pub struct RecordingDesktop {
    current: Cell<Color>,
    calls: RefCell<Vec<DesktopCall>>,
    reads: Cell<usize>,
    reject: Option<&'static str>,
}

impl RecordingDesktop {
    pub fn new(current: Color) -> Self {
        Self {
            current: Cell::new(current),
            calls: RefCell::new(Vec::new()),
            reads: Cell::new(0),
            reject: None,
        }
    }

    /// Fail the call named like the native method (`GetBackgroundColor`,
    /// `SetWallpaper`, or `SetBackgroundColor`).
    pub fn rejecting(mut self, call: &'static str) -> Self {
        self.reject = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<DesktopCall> {
        self.calls.borrow().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn check(&self, call: &'static str) -> Result<(), ShellInteropError> {
        if self.reject == Some(call) {
            return Err(ShellInteropError::CallFailed {
                call,
                detail: "rejected by test fixture".to_string(),
            });
        }
        Ok(())
    }
}

impl DesktopBackground for RecordingDesktop {
    fn background_color(&self) -> Result<Color, ShellInteropError> {
        self.check("GetBackgroundColor")?;
        self.reads.set(self.reads.get() + 1);
        Ok(self.current.get())
    }

    fn clear_wallpaper(&self) -> Result<(), ShellInteropError> {
        self.check("SetWallpaper")?;
        self.calls.borrow_mut().push(DesktopCall::ClearWallpaper);
        Ok(())
    }

    fn set_background_color(&self, color: Color) -> Result<(), ShellInteropError> {
        self.check("SetBackgroundColor")?;
        self.current.set(color);
        self.calls.borrow_mut().push(DesktopCall::SetColor(color));
        Ok(())
    }
}

/// Broadcaster fake that records announced areas.
#[derive(Debug, Default)]
pub struct RecordingBroadcaster {
    areas: RefCell<Vec<String>>,
}

impl RecordingBroadcaster {
    pub fn areas(&self) -> Vec<String> {
        self.areas.borrow().clone()
    }
}

impl SettingBroadcaster for RecordingBroadcaster {
    fn broadcast(&self, area: &str) {
        self.areas.borrow_mut().push(area.to_string());
    }
}
