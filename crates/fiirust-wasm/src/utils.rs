/// Routes Rust panics to `console.error` so they show up in the browser
/// console instead of as an opaque `unreachable` trap.
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
