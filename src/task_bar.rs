use crate::system::{SystemError, SystemResult, WindowApi};
use log::debug;

/// Class name the desktop shell registers for the taskbar window.
pub const TASKBAR_CLASS: &str = "Shell_TrayWnd";

pub struct Taskbar<TApi: WindowApi> {
    api: TApi,
}

impl<TApi: WindowApi> Taskbar<TApi> {
    pub fn new(api: TApi) -> Self {
        Self { api }
    }

    /// Resolves the taskbar window and applies the requested visibility.
    /// The handle is looked up fresh on every call and never kept around.
    pub fn set_visibility(&self, show: bool) -> SystemResult {
        let window = self
            .api
            .find_window_by_class(TASKBAR_CLASS)
            .ok_or(SystemError::WindowNotFound)?;

        if show {
            debug!("Showing taskbar");
            self.api.show_window(window);
        } else {
            debug!("Hiding taskbar");
            self.api.hide_window(window);
        }

        Ok(())
    }

    /// Teardown path: always back to shown, whatever was requested last.
    pub fn restore(&self) -> SystemResult {
        self.set_visibility(true)
    }
}
