use truthspot_core::catalog::Catalog;

use super::*;

/// Fetches categories, tags and their associations concurrently.
pub async fn load_catalog<G>(gateway: &G) -> Result<Catalog>
where
    G: CatalogGateway + ?Sized,
{
    let (categories, tags, category_tags) = tokio::try_join!(
        gateway.all_categories(),
        gateway.all_tags(),
        gateway.all_category_tags()
    )
    .inspect_err(|err| error!("Failed to load categories and tags: {err}"))?;
    debug!(
        "Loaded {} categories, {} tags and {} associations",
        categories.len(),
        tags.len(),
        category_tags.len()
    );
    Ok(Catalog::new(categories, tags, category_tags))
}
