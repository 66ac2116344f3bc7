use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "OUDS_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a fmt subscriber filtered by `OUDS_LOG`. Later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!("logging initialised twice");
    }
}
