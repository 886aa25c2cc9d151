#[cfg(target_arch = "wasm32")]
fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing for logging
    tracing_wasm::set_as_global_default();

    // Wire the forms
    campus_forms::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("campus-forms runs in the browser; build it for wasm32-unknown-unknown");
}
