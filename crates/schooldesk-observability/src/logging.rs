use schooldesk_config::LoggingConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: SchoolDesk crates at `level`, noisy
/// dependencies at `warn`.
pub fn default_filter(level: &str) -> String {
    format!(
        "schooldesk={level},schooldesk_auth={level},schooldesk_observability={level},tower_http=warn,hyper=warn,axum::rejection=trace"
    )
}

/// Initialize the global tracing subscriber.
///
/// - **Console**: compact format with file and line numbers, filtered by
///   `RUST_LOG` or [`default_filter`]
/// - **Files**: when `log_dir` is set, `schooldesk.json` rotated daily with
///   the current span list, at `info` and above
pub fn init_tracing(config: &LoggingConfig) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let json_layer = config.log_dir.as_ref().map(|dir| {
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, "schooldesk.json");
        fmt::layer()
            .json()
            .with_writer(appender)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(EnvFilter::new("info"))
    });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();

    match &config.log_dir {
        Some(dir) => tracing::info!(log_dir = %dir.display(), "Tracing initialized with JSON file logging"),
        None => tracing::info!("Tracing initialized (console only)"),
    }
}
