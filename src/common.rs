use std::sync::atomic::AtomicBool;

pub(crate) static DEBUG: AtomicBool = AtomicBool::new(false);

// Diagnostics go to stderr; stdout carries only answers.
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::common::DEBUG.load(::std::sync::atomic::Ordering::Relaxed) {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_println;
