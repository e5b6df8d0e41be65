//! Shared helpers for the integration suite.

/// Initialize tracing output for test runs.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Verbosity follows `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Get the API key for live integration tests.
///
/// **IMPORTANT**: Live tests MUST run against the real Perigon API.
/// This function panics with a helpful error message if `PERIGON_API_KEY`
/// is not set or is empty. Live tests should NOT silently skip.
#[allow(dead_code)]
pub fn api_key() -> String {
    match std::env::var("PERIGON_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        Ok(_) => {
            panic!(
                "\n\n\
                ╔══════════════════════════════════════════════════════════╗\n\
                ║ LIVE TEST CONFIGURATION ERROR                            ║\n\
                ╠══════════════════════════════════════════════════════════╣\n\
                ║ PERIGON_API_KEY is set but empty!                        ║\n\
                ║                                                          ║\n\
                ║ Live tests require a valid Perigon API key.              ║\n\
                ║                                                          ║\n\
                ║ To fix:                                                  ║\n\
                ║   1. Create a key at https://goperigon.com               ║\n\
                ║   2. Export: export PERIGON_API_KEY='<your key>'         ║\n\
                ╚══════════════════════════════════════════════════════════╝\n\n"
            );
        }
        Err(_) => {
            panic!(
                "\n\n\
                ╔══════════════════════════════════════════════════════════╗\n\
                ║ LIVE TEST CONFIGURATION ERROR                            ║\n\
                ╠══════════════════════════════════════════════════════════╣\n\
                ║ PERIGON_API_KEY environment variable is NOT set!         ║\n\
                ║                                                          ║\n\
                ║ Live tests require a valid Perigon API key and cannot    ║\n\
                ║ run without one.                                         ║\n\
                ║                                                          ║\n\
                ║ To fix:                                                  ║\n\
                ║   1. Create a key at https://goperigon.com               ║\n\
                ║   2. Export: export PERIGON_API_KEY='<your key>'         ║\n\
                ╚══════════════════════════════════════════════════════════╝\n\n"
            );
        }
    }
}
