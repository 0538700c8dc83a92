// Integration tests module

mod integration {
    mod cli_test;
    mod clock_test;
    mod config_test;
    mod geo_test;
    mod http_stub;
    mod metrics_test;
    mod network_test;
}
