use tracing_subscriber::filter::LevelFilter;

/// Install a stderr fmt subscriber at `level`. Calling this again after a
/// subscriber is already set is a no-op.
pub fn init_logging(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_is_harmless() {
        init_logging(LevelFilter::OFF);
        init_logging(LevelFilter::DEBUG);
        tracing::debug!("still fine");
    }
}
