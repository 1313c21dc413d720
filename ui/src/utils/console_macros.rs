/// Macros for properly formatted console logging
/// In the browser these wrap gloo_console and prefix every line with a
/// `js_sys::Date` timestamp. Native builds (tests, tooling) route the same
/// call sites through `tracing`, since the browser console bindings are
/// not callable outside wasm.
#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::gloo_console::info!(format!(
            "[{}] {}",
            $crate::__private::js_sys::Date::now(),
            format!($($arg)*)
        ));
        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::info!($($arg)*);
    }};
}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::gloo_console::log!(format!(
            "[{}] {}",
            $crate::__private::js_sys::Date::now(),
            format!($($arg)*)
        ));
        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::trace!($($arg)*);
    }};
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::gloo_console::warn!(format!(
            "[{}] {}",
            $crate::__private::js_sys::Date::now(),
            format!($($arg)*)
        ));
        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::warn!($($arg)*);
    }};
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::gloo_console::error!(format!(
            "[{}] {}",
            $crate::__private::js_sys::Date::now(),
            format!($($arg)*)
        ));
        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::error!($($arg)*);
    }};
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::__private::gloo_console::debug!(format!(
            "[{}] {}",
            $crate::__private::js_sys::Date::now(),
            format!($($arg)*)
        ));
        #[cfg(not(target_arch = "wasm32"))]
        $crate::__private::tracing::debug!($($arg)*);
    }};
}
