use super::{WindowApi, WindowId};
use crate::util;
use std::ptr;
use winapi::shared::windef::HWND;
use winapi::um::winuser::{FindWindowW, ShowWindow, SW_HIDE, SW_SHOW};

pub struct WinApi;

impl WindowApi for WinApi {
    fn find_window_by_class(&self, class_name: &str) -> Option<WindowId> {
        let class_name = util::to_widestring(class_name);
        let hwnd = unsafe { FindWindowW(class_name.as_ptr(), ptr::null()) };

        if hwnd.is_null() {
            None
        } else {
            Some(hwnd as WindowId)
        }
    }

    fn show_window(&self, id: WindowId) {
        unsafe {
            ShowWindow(id as HWND, SW_SHOW);
        }
    }

    fn hide_window(&self, id: WindowId) {
        unsafe {
            ShowWindow(id as HWND, SW_HIDE);
        }
    }
}
