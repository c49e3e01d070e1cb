//! Console logging
//!
//! In the browser every line goes to `console.log` / `console.warn` / `console.error`.
//! Native builds (tests, tooling) write the same lines to stderr so nothing
//! touches wasm-bindgen imports outside of wasm32.
//!
//! Usage:
//! ```rust
//! use pixel_wave_engine::console_log;
//!
//! console_log!("restored {} cells", 12);
//! ```

#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[pixel-wave] {}", msg);
    }
}

pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[pixel-wave] WARN {}", msg);
    }
}

pub fn error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        console::error_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[pixel-wave] ERROR {}", msg);
    }
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::console::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::console::warn(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::core::console::error(&format!($($arg)*))
    };
}
