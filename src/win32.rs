use windows::{
    core::{Error, HSTRING, PCWSTR},
    Win32::{
        Foundation::*,
        Graphics::Gdi::{
            BeginPaint, EndPaint, FillRect, GetSysColorBrush, COLOR_WINDOW, HDC, PAINTSTRUCT,
        },
        System::{
            Console::{AttachConsole, ATTACH_PARENT_PROCESS},
            LibraryLoader::GetModuleHandleW,
        },
        UI::WindowsAndMessaging::*,
    },
};

use crate::event::Event;
use crate::host::{Host, HostError, PaintRegion, Rect, Retrieved};
use crate::procedure;
use crate::window::WindowClass;

/// Makes log output visible when started from a console. GUI subsystem
/// processes have none of their own.
pub fn attach_console() {
    unsafe {
        _ = AttachConsole(ATTACH_PARENT_PROCESS);
    }
}

/// The Win32 windowing subsystem of the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Win32Host;

impl Win32Host {
    fn instance() -> Result<HINSTANCE, HostError> {
        let module = unsafe { GetModuleHandleW(None)? };
        Ok(module.into())
    }
}

pub struct Win32Paint {
    window: HWND,
    ps: PAINTSTRUCT,
    hdc: HDC,
}

impl PaintRegion for Win32Paint {
    fn rect(&self) -> Rect {
        let r = self.ps.rcPaint;
        Rect::new(r.left, r.top, r.right, r.bottom)
    }

    fn fill_background(&mut self) {
        unsafe {
            FillRect(self.hdc, &self.ps.rcPaint, GetSysColorBrush(COLOR_WINDOW));
        }
    }
}

impl Drop for Win32Paint {
    fn drop(&mut self) {
        unsafe {
            _ = EndPaint(self.window, &self.ps);
        }
    }
}

impl Host for Win32Host {
    type Window = HWND;
    type Message = MSG;
    type Paint<'a> = Win32Paint;

    fn register_class(&self, class: &WindowClass) -> Result<(), HostError> {
        let name = HSTRING::from(class.name);
        unsafe {
            let wc = WNDCLASSW {
                hCursor: LoadCursorW(None, IDC_ARROW)?,
                hInstance: Self::instance()?,
                lpszClassName: PCWSTR(name.as_ptr()),
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(wnd_proc),
                ..Default::default()
            };
            if RegisterClassW(&wc) == 0 {
                return Err(Error::from_win32().into());
            }
        }
        Ok(())
    }

    fn create_window(&self, class: &WindowClass) -> Result<HWND, HostError> {
        let instance = Self::instance()?;
        let window = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                &HSTRING::from(class.name),
                &HSTRING::from(class.title),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                None,
                None,
                Some(instance),
                None,
            )?
        };
        Ok(window)
    }

    fn show(&self, window: HWND) {
        // Honours the show state requested by whoever started the process.
        unsafe {
            _ = ShowWindow(window, SW_SHOWDEFAULT);
        }
    }

    fn next_message(&self) -> Result<Retrieved<MSG>, HostError> {
        let mut message = MSG::default();
        let result = unsafe { GetMessageW(&mut message, None, 0, 0) };
        match result.0 {
            -1 => Err(Error::from_win32().into()),
            0 => Ok(Retrieved::Quit(message.wParam.0 as i32)),
            _ => Ok(Retrieved::Message(message)),
        }
    }

    fn event(message: &MSG) -> Event<HWND> {
        Event::new(message.hwnd, message.message, message.wParam.0, message.lParam.0)
    }

    fn translate(&self, message: &MSG) {
        unsafe {
            _ = TranslateMessage(message);
        }
    }

    fn dispatch(&self, message: &MSG) {
        unsafe {
            DispatchMessageW(message);
        }
    }

    fn post_quit(&self, exit_code: i32) {
        unsafe { PostQuitMessage(exit_code) }
    }

    fn begin_paint(&self, window: HWND) -> Option<Win32Paint> {
        let mut ps = PAINTSTRUCT::default();
        let hdc = unsafe { BeginPaint(window, &mut ps) };
        if hdc.is_invalid() {
            return None;
        }
        Some(Win32Paint { window, ps, hdc })
    }

    fn default_handling(&self, event: &Event<HWND>) -> isize {
        unsafe {
            DefWindowProcW(
                event.window,
                event.message(),
                WPARAM(event.wparam),
                LPARAM(event.lparam),
            )
            .0
        }
    }
}

unsafe extern "system" fn wnd_proc(
    window: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let event = Event::new(window, message, wparam.0, lparam.0);
    LRESULT(procedure::handle_event(&Win32Host, &event))
}
