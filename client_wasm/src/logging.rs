use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Route `tracing` output to the browser console and hook panics.
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    // There is no process environment in the browser, so this is normally "info"
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());

    if tracing_subscriber::registry()
        .with(filter)
        .with(wasm_layer)
        .try_init()
        .is_ok()
    {
        // Panics with stacktrace
        console_error_panic_hook::set_once();
    }
}
