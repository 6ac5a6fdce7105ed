use async_trait::async_trait;
use truthspot_boundary as json;
use truthspot_core::{
    entities::*,
    gateways::{backend::*, Error, Result},
};

use super::{filter, ListParams, PocketBase};

const SORT_NEWEST_FIRST: &str = "-created";
const EXPAND_CATEGORY: &str = "category";

fn into_spot(record: json::Spot) -> Result<Spot> {
    Spot::try_from(record).map_err(|err| Error::Decode(err.to_string()))
}

/// Converts a page of records, skipping broken ones.
fn spots_from_records(records: Vec<json::Spot>) -> Vec<Spot> {
    records
        .into_iter()
        .filter_map(|record| {
            into_spot(record)
                .inspect_err(|err| log::warn!("Ignoring spot record: {err}"))
                .ok()
        })
        .collect()
}

#[async_trait]
impl SpotGateway for PocketBase {
    async fn query_spots(&self, query: &SpotQuery) -> Result<Vec<Spot>> {
        let params = ListParams {
            page: 1,
            per_page: query.limit,
            sort: Some(SORT_NEWEST_FIRST.to_string()),
            filter: filter::spot_query(query),
            expand: query.expand_category.then(|| EXPAND_CATEGORY.to_string()),
        };
        let page = self.list::<json::Spot>(json::SPOTS, &params).await?;
        log::debug!(
            "Received {} of {} matching spots",
            page.items.len(),
            page.total_items
        );
        Ok(spots_from_records(page.items))
    }

    async fn get_spot(&self, id: &Id, expand_category: bool) -> Result<Spot> {
        let expand = expand_category.then_some(EXPAND_CATEGORY);
        let record = self.get::<json::Spot>(json::SPOTS, id.as_str(), expand).await?;
        into_spot(record)
    }

    async fn create_spot(&self, spot: &NewSpot) -> Result<Spot> {
        let record = json::NewSpot::from(spot);
        let created = self.create::<_, json::Spot>(json::SPOTS, &record).await?;
        into_spot(created)
    }

    async fn update_spot_visibility(&self, id: &Id, visibility: Visibility) -> Result<Spot> {
        let data = json::UpdateVisibility::from(visibility);
        let updated = self
            .update::<_, json::Spot>(json::SPOTS, id.as_str(), &data)
            .await?;
        into_spot(updated)
    }

    async fn delete_spot(&self, id: &Id) -> Result<()> {
        self.delete(json::SPOTS, id.as_str()).await
    }
}
