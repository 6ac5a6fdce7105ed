//! Rendering of PocketBase filter expressions.

use itertools::Itertools;
use truthspot_core::{entities::*, gateways::backend::*};

/// Quotes a string literal of a filter expression.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

pub fn bbox(bbox: &MapBbox) -> String {
    let (sw_lat, sw_lng) = bbox.southwest().to_lat_lng_deg();
    let (ne_lat, ne_lng) = bbox.northeast().to_lat_lng_deg();
    format!("lat >= {sw_lat} && lat <= {ne_lat} && lng >= {sw_lng} && lng <= {ne_lng}")
}

pub fn owner(id: &Id) -> String {
    format!("user = {}", quote(id.as_str()))
}

/// `None` if the caller may see everything.
pub fn access(filter: &AccessFilter) -> Option<String> {
    match filter {
        AccessFilter::Unrestricted => None,
        AccessFilter::PublicOrOwnedBy(Some(id)) => Some(format!("(isPublic = true || {})", owner(id))),
        AccessFilter::PublicOrOwnedBy(None) => Some("isPublic = true".to_string()),
    }
}

/// Joins all predicates of the query, `None` if there are none.
pub fn spot_query(query: &SpotQuery) -> Option<String> {
    let SpotQuery {
        bbox: query_bbox,
        owner: query_owner,
        access: query_access,
        limit: _,
        expand_category: _,
    } = query;
    let filter = query_bbox
        .as_ref()
        .map(bbox)
        .into_iter()
        .chain(query_owner.as_ref().map(owner))
        .chain(access(query_access))
        .join(" && ");
    (!filter.is_empty()).then_some(filter)
}
