use thiserror::Error;

#[cfg(windows)]
pub use win::WinApi as NativeApi;

#[cfg(windows)]
pub mod win;

pub type WindowId = i32;

/// Boundary to the OS window system. The taskbar controller only ever talks
/// to the shell through this trait, so tests can substitute a fake shell.
pub trait WindowApi {
    /// Looks up a top-level window by its registered class name. Always a
    /// fresh lookup; implementations must not cache handles.
    fn find_window_by_class(&self, class_name: &str) -> Option<WindowId>;
    fn show_window(&self, id: WindowId);
    fn hide_window(&self, id: WindowId);
}

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("OOPS! Couldn't find taskbar window. Failed!")]
    WindowNotFound,
}

pub type SystemResult<T = ()> = Result<T, SystemError>;
