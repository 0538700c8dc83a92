use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DashError, Result};

/// Provider-supplied metadata value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for GeoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoValue::Number(n) => write!(f, "{}", n),
            GeoValue::Text(s) => f.write_str(s),
        }
    }
}

/// Approximate location of one IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub ip: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Everything else the provider sent (country, city, isp, timezone...)
    pub fields: BTreeMap<String, GeoValue>,
}

impl GeoRecord {
    pub fn field(&self, key: &str) -> Option<&GeoValue> {
        self.fields.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(GeoValue::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn country(&self) -> Option<&str> {
        self.text("country")
    }

    pub fn city(&self) -> Option<&str> {
        self.text("city")
    }

    pub fn isp(&self) -> Option<&str> {
        self.text("isp")
    }

    /// "City, Region, Country" from whatever parts are present
    pub fn place(&self) -> String {
        let parts: Vec<&str> = [self.city(), self.text("regionName"), self.country()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            "unknown".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Validate a provider body and turn it into a [`GeoRecord`].
///
/// The body is treated as loosely typed: it must be a JSON object, must not
/// carry `"status": "fail"`, and must have numeric `lat`/`lon` inside the
/// valid coordinate ranges. String and number fields are kept, everything
/// else is dropped.
pub fn parse_geo_response(requested_ip: &str, body: &str) -> Result<GeoRecord> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| DashError::geo_lookup_failed(format!("malformed response: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| DashError::geo_lookup_failed("response is not an object"))?;

    if object.get("status").and_then(Value::as_str) == Some("fail") {
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("provider rejected the query");
        return Err(DashError::geo_lookup_failed(message));
    }

    let latitude = coordinate(object.get("lat"), "lat", 90.0)?;
    let longitude = coordinate(object.get("lon"), "lon", 180.0)?;

    let ip = object
        .get("query")
        .and_then(Value::as_str)
        .unwrap_or(requested_ip)
        .to_string();

    let fields = object
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "lat" | "lon" | "status"))
        .filter_map(|(key, value)| {
            let converted = match value {
                Value::String(s) => GeoValue::Text(s.clone()),
                Value::Number(n) => GeoValue::Number(n.as_f64()?),
                _ => return None,
            };
            Some((key.clone(), converted))
        })
        .collect();

    Ok(GeoRecord {
        ip,
        latitude,
        longitude,
        fields,
    })
}

fn coordinate(value: Option<&Value>, name: &str, limit: f64) -> Result<f64> {
    let v = value
        .and_then(Value::as_f64)
        .ok_or_else(|| DashError::geo_lookup_failed(format!("missing numeric '{}'", name)))?;

    if v.is_finite() && (-limit..=limit).contains(&v) {
        Ok(v)
    } else {
        Err(DashError::geo_lookup_failed(format!(
            "'{}' out of range: {}",
            name, v
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLE_DNS: &str = r#"{
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "region": "VA",
        "regionName": "Virginia",
        "city": "Ashburn",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "query": "8.8.8.8"
    }"#;

    #[test]
    fn test_parse_success() {
        let record = parse_geo_response("8.8.8.8", GOOGLE_DNS).unwrap();

        assert_eq!(record.ip, "8.8.8.8");
        assert_eq!(record.latitude, 39.03);
        assert_eq!(record.longitude, -77.5);
        assert_eq!(record.country(), Some("United States"));
        assert_eq!(record.isp(), Some("Google LLC"));
        assert_eq!(record.place(), "Ashburn, Virginia, United States");
        assert!(record.field("lat").is_none());
        assert!(record.field("status").is_none());
    }

    #[test]
    fn test_provider_failure_message_is_kept() {
        let body = r#"{"status":"fail","message":"invalid query","query":"not-an-ip"}"#;
        match parse_geo_response("not-an-ip", body) {
            Err(DashError::GeoLookupFailed(msg)) => assert_eq!(msg, "invalid query"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unusable_bodies() {
        let bodies = [
            "",
            "<html>rate limited</html>",
            "[1, 2]",
            r#"{"lat": "39.0", "lon": -77.5}"#,
            r#"{"lat": 39.0}"#,
            r#"{"lat": 91.0, "lon": 0.0}"#,
            r#"{"lat": 0.0, "lon": -180.5}"#,
        ];
        for body in bodies {
            assert!(
                matches!(parse_geo_response("1.1.1.1", body), Err(DashError::GeoLookupFailed(_))),
                "accepted {:?}",
                body
            );
        }
    }

    #[test]
    fn test_missing_query_uses_requested_ip() {
        let record = parse_geo_response("1.1.1.1", r#"{"lat": -33.4, "lon": 151.2}"#).unwrap();
        assert_eq!(record.ip, "1.1.1.1");
        assert_eq!(record.place(), "unknown");
    }

    #[test]
    fn test_nested_values_are_dropped() {
        let body = r#"{"lat": 1.0, "lon": 2.0, "mobile": false, "extra": {"a": 1}, "asn": 15169}"#;
        let record = parse_geo_response("x", body).unwrap();
        assert_eq!(record.fields.len(), 1);
        assert_eq!(record.field("asn"), Some(&GeoValue::Number(15169.0)));
    }
}
