//! Logger setup

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger once
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this program and
/// the GPU stack is held at `warn`. Later calls are ignored.
pub fn init_logging(level: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(level);
            builder.filter_module("wgpu_core", log::LevelFilter::Warn);
            builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
            builder.filter_module("naga", log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
