//! Logging initialization.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

/// Directives appended to `logging.level` unless the level names them.
/// sqlx logs every statement at info.
const QUIET_TARGETS: &[&str] = &["sqlx=warn", "tower_http=info"];

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides `logging.level`. `logging.format` selects `json`,
/// `compact`, or anything else for the pretty format.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            let json_layer = fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_target(true);
            subscriber.with(json_layer).init();
        }
        "compact" => {
            subscriber
                .with(fmt::layer().compact().with_target(true))
                .init();
        }
        _ => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true);
            subscriber.with(pretty_layer).init();
        }
    }
}

fn filter_directives(level: &str) -> String {
    let mut directives = vec![level.to_string()];
    for quiet in QUIET_TARGETS {
        let target = quiet.split('=').next().unwrap_or_default();
        if !level.contains(target) {
            directives.push((*quiet).to_string());
        }
    }
    directives.join(",")
}
