use async_trait::async_trait;
use truthspot_boundary as json;
use truthspot_core::{entities::*, gateways::backend::*, gateways::Result};

use super::PocketBase;

#[async_trait]
impl CatalogGateway for PocketBase {
    async fn all_categories(&self) -> Result<Vec<Category>> {
        let records = self
            .full_list::<json::Category>(json::SPOT_CATEGORIES, Some("name"))
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn all_tags(&self) -> Result<Vec<Tag>> {
        let records = self
            .full_list::<json::Tag>(json::SPOT_TAGS, Some("name"))
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    async fn all_category_tags(&self) -> Result<Vec<CategoryTag>> {
        let records = self
            .full_list::<json::CategoryTag>(json::SPOT_CATEGORY_TAGS, None)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
