//! Win32 message box notifier.
//!
//! The handler runs without a console window, so notices are shown as
//! application-modal `MessageBoxW` dialogs with no owner window.

#![cfg(target_os = "windows")]

use windows::core::HSTRING;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, IDYES, MB_ICONERROR, MB_ICONQUESTION, MB_OK, MB_YESNO, MESSAGEBOX_RESULT,
    MESSAGEBOX_STYLE,
};

use crate::application::notify::{Notice, NotifyError, UserNotifier};

#[derive(Debug, Default)]
pub struct MessageBoxNotifier;

impl MessageBoxNotifier {
    pub fn new() -> Self {
        Self
    }

    fn show(notice: &Notice, style: MESSAGEBOX_STYLE) -> Result<MESSAGEBOX_RESULT, NotifyError> {
        // SAFETY: both strings outlive the call; a null owner window is allowed.
        let result = unsafe {
            MessageBoxW(
                HWND::default(),
                &HSTRING::from(notice.message.as_str()),
                &HSTRING::from(notice.title.as_str()),
                style,
            )
        };
        // Zero means the box could not be created.
        if result.0 == 0 {
            return Err(NotifyError::Platform(
                windows::core::Error::from_win32().to_string(),
            ));
        }
        Ok(result)
    }
}

impl UserNotifier for MessageBoxNotifier {
    fn inform(&self, notice: &Notice) -> Result<(), NotifyError> {
        Self::show(notice, MB_OK | MB_ICONERROR).map(|_| ())
    }

    fn confirm(&self, notice: &Notice) -> Result<bool, NotifyError> {
        Self::show(notice, MB_YESNO | MB_ICONQUESTION).map(|answer| answer == IDYES)
    }
}
