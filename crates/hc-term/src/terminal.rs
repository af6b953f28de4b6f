// SPDX-License-Identifier: MIT
//
// Process-level terminal plumbing: TTY detection, interrupt signals, and
// panic-safe cursor restore.
//
// Safety: This module uses `unsafe` for isatty, sigaction, and a raw fd
// write. These are the standard POSIX interfaces; there is no safe
// alternative in std. Each unsafe block is minimal.
#![allow(unsafe_code)]
//
// The clock never enters raw mode, so the only terminal state worth
// restoring is the cursor visibility. Interrupts are
// turned into a flag the tick loop polls, which lets the loop finish the
// renderer (show the cursor) before the process exits.

use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── Interrupts ─────────────────────────────────────────────────────────────

/// Global flag set by the SIGINT/SIGTERM handler.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Whether an interrupt signal has been received.
#[inline]
#[must_use]
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::Relaxed)
}

/// Install handlers for SIGINT and SIGTERM.
///
/// The handler only sets the [`interrupted`] flag. Writing to an atomic is
/// async-signal-safe; anything more (I/O, allocation) is not.
#[cfg(unix)]
pub fn install_interrupt_handler() {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = interrupt_handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(libc::SIGINT, &raw const sa, std::ptr::null_mut());
        libc::sigaction(libc::SIGTERM, &raw const sa, std::ptr::null_mut());
    }
    tracing::debug!("interrupt handlers installed");
}

#[cfg(unix)]
extern "C" fn interrupt_handler(_sig: libc::c_int) {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() {
    // No-op on non-unix platforms: the runtime default terminates the process.
}

// ─── Panic-Safe Restore ─────────────────────────────────────────────────────

/// Show the cursor.
const EMERGENCY_RESTORE: &[u8] = b"\x1b[?25h";

/// Panic hook guard. Ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that shows the cursor before printing the error.
///
/// The hook writes [`EMERGENCY_RESTORE`] directly to fd 1, bypassing Rust's
/// stdout lock in case the panic happened mid-flush, then delegates to the
/// original handler.
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();
            original(info);
        }));
    });
}

fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            EMERGENCY_RESTORE.as_ptr().cast::<libc::c_void>(),
            EMERGENCY_RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        use std::io::Write;
        let _ = std::io::stdout().write_all(EMERGENCY_RESTORE);
        let _ = std::io::stdout().flush();
    }
}
