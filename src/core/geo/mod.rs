//! IP geolocation through a third-party provider.

mod cache;
mod locator;
mod record;

pub use cache::{CachedGeoLocator, DEFAULT_CACHE_CAPACITY};
pub use locator::{build_lookup_url, GeoLocator, GeoLookup, DEFAULT_GEO_URL_TEMPLATE};
pub use record::{parse_geo_response, GeoRecord, GeoValue};
