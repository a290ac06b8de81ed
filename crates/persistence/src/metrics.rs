//! Repository query timing and connection pool gauges.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::{Duration, Instant};

/// Queries slower than this are logged as well as measured.
const SLOW_QUERY: Duration = Duration::from_millis(500);

pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Snapshot of the pool, also published as gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: u32,
}

impl PoolStats {
    pub fn active(&self) -> u32 {
        self.size.saturating_sub(self.idle)
    }
}

/// Reads the pool's connection counts and publishes them.
pub fn record_pool_metrics(pool: &PgPool) -> PoolStats {
    let stats = PoolStats {
        size: pool.size(),
        idle: pool.num_idle() as u32,
    };

    gauge!("database_connections_active").set(stats.active() as f64);
    gauge!("database_connections_idle").set(stats.idle as f64);
    gauge!("database_connections_total").set(stats.size as f64);
    stats
}

/// Times one repository query. Call [`QueryTimer::record`] once the query
/// has finished, whatever its outcome.
///
/// ```ignore
/// let timer = QueryTimer::new("find_project_by_id");
/// let result = sqlx::query_as::<_, ProjectEntity>(&sql).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    pub fn record(self) {
        let elapsed = self.start.elapsed();
        if elapsed >= SLOW_QUERY {
            tracing::warn!(
                query = %self.query_name,
                elapsed_ms = elapsed.as_millis() as u64,
                "Slow database query"
            );
        }
        record_query_duration(&self.query_name, elapsed.as_secs_f64());
    }
}
