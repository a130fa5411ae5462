use serial_test::serial;
use vpp_dashboard::{
    config::{ACCESS_KEY_ENV, BackendConfig, ENDPOINT_ENV},
    providers::{CustomerBackend, supabase::SupabaseBackend},
};

#[tokio::test]
#[serial]
#[ignore]
async fn test_supabase_fetch_all() {
    // This test requires SUPABASE_URL and SUPABASE_ANON_KEY to be set in the environment.
    if std::env::var(ENDPOINT_ENV).is_err() || std::env::var(ACCESS_KEY_ENV).is_err() {
        println!("Skipping test_supabase_fetch_all: backend credentials not set.");
        return;
    }

    let backend = SupabaseBackend::new(&BackendConfig::from_env()).expect("Failed to create SupabaseBackend");
    let result = backend.fetch_all().await;
    assert!(result.is_ok(), "fetch_all returned an error: {:?}", result.err());

    let rows = result.unwrap();
    for pair in rows.windows(2) {
        if let (Some(a), Some(b)) = (pair[0].created_at, pair[1].created_at) {
            assert!(a >= b, "rows should be newest first");
        }
    }
}
