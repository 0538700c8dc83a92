use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sysdash::core::geo::{
    build_lookup_url, parse_geo_response, CachedGeoLocator, GeoLookup,
    DEFAULT_GEO_URL_TEMPLATE,
};
use sysdash::core::{GeoLocator, GeoRecord};
use sysdash::{DashError, DashboardConfig, Result};

use super::http_stub::serve_once;

const IP_API_SUCCESS: &str = r#"{
    "status": "success",
    "country": "United States",
    "countryCode": "US",
    "regionName": "Virginia",
    "city": "Ashburn",
    "zip": "20149",
    "lat": 39.03,
    "lon": -77.5,
    "timezone": "America/New_York",
    "isp": "Google LLC",
    "query": "8.8.8.8"
}"#;

#[test]
fn test_parse_provider_payload() {
    let record = parse_geo_response("8.8.8.8", IP_API_SUCCESS).unwrap();

    assert_eq!(record.ip, "8.8.8.8");
    assert!((record.latitude - 39.03).abs() < 1e-9);
    assert!((record.longitude + 77.5).abs() < 1e-9);
    assert_eq!(record.city(), Some("Ashburn"));
    assert_eq!(record.country(), Some("United States"));
    assert!(record.field("lat").is_none());
    assert!(record.field("status").is_none());
}

#[test]
fn test_provider_failure_is_lookup_error() {
    let body = r#"{"status":"fail","message":"private range","query":"10.0.0.1"}"#;
    let err = parse_geo_response("10.0.0.1", body).unwrap_err();

    assert!(matches!(err, DashError::GeoLookupFailed(_)));
    assert!(err.to_string().contains("private range"));
}

#[test]
fn test_lookup_url_from_default_template() {
    let url = build_lookup_url(DEFAULT_GEO_URL_TEMPLATE, "1.1.1.1").unwrap();
    assert_eq!(url.as_str(), "http://ip-api.com/json/1.1.1.1");
}

#[test]
fn test_configured_lookup_reports_unreachable_provider() {
    let config = DashboardConfig {
        geo_url_template: "http://127.0.0.1:9/json/{ip}".to_string(),
        http_timeout_secs: 2,
        geo_cache_ttl_secs: Some(60),
        ..Default::default()
    };
    let lookup = config.geo_lookup();

    // Failures are never cached, so both calls reach the provider
    for _ in 0..2 {
        let err = lookup.locate("8.8.8.8").unwrap_err();
        assert!(matches!(err, DashError::GeoLookupFailed(_)));
    }
}

struct FixedLookup {
    calls: Arc<AtomicUsize>,
}

impl GeoLookup for FixedLookup {
    fn locate(&self, ip: &str) -> Result<GeoRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        parse_geo_response(ip, IP_API_SUCCESS)
    }
}

#[test]
fn test_cache_serves_repeat_lookups() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cache = CachedGeoLocator::new(
        FixedLookup {
            calls: Arc::clone(&calls),
        },
        Duration::from_secs(60),
        4,
    );

    let first = cache.locate("8.8.8.8").unwrap();
    let second = cache.locate("8.8.8.8").unwrap();
    cache.locate("1.1.1.1").unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

fn stub_locator(status: &str, body: &str) -> GeoLocator {
    let base = serve_once(status, body);
    GeoLocator::new(format!("{}json/{{ip}}", base), Duration::from_secs(5))
}

#[test]
fn test_locate_against_provider() {
    let locator = stub_locator("200 OK", IP_API_SUCCESS);
    let record = locator.locate("8.8.8.8").unwrap();
    assert_eq!(record.isp(), Some("Google LLC"));
}

#[test]
fn test_locate_provider_error_status() {
    let locator = stub_locator("503 Service Unavailable", "busy");
    let err = locator.locate("8.8.8.8").unwrap_err();
    assert!(matches!(err, DashError::GeoLookupFailed(_)));
    assert!(err.to_string().contains("503"));
}

#[test]
fn test_locate_provider_rejects_input() {
    let locator = stub_locator(
        "200 OK",
        r#"{"status":"fail","message":"invalid query","query":"not-an-ip"}"#,
    );
    let err = locator.locate("not-an-ip").unwrap_err();
    assert!(matches!(err, DashError::GeoLookupFailed(_)));
    assert!(err.to_string().contains("invalid query"));
}

#[test]
fn test_locate_blank_input() {
    let locator = GeoLocator::default();
    assert!(matches!(
        locator.locate("  "),
        Err(DashError::GeoLookupFailed(_))
    ));
}
