//! # Snack Commands
//!
//! Home feed and snack detail page.

use serde::Serialize;
use snack_catalog::Catalog;
use snack_core::{Filter, Snack, SnackCollection, SnackId};
use tracing::debug;

use crate::error::ApiError;

/// Everything the snack detail page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackDetail {
    pub snack: Snack,
    pub related: Vec<SnackCollection>,
}

/// Home screen: filter chips above the feed rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub filters: Vec<Filter>,
    pub collections: Vec<SnackCollection>,
}

/// Gets a snack with its related rows.
///
/// ## Errors
/// * `NOT_FOUND` - unknown snack id
/// * `CATALOG_UNAVAILABLE` - catalog offline
pub fn get_snack(catalog: &Catalog, snack_id: i64) -> Result<SnackDetail, ApiError> {
    debug!(snack_id, "get_snack command");

    let id = SnackId::new(snack_id);
    let snacks = catalog.snacks();
    Ok(SnackDetail {
        snack: snacks.get_by_id(id)?,
        related: snacks.related(id)?,
    })
}

pub fn get_related(catalog: &Catalog, snack_id: i64) -> Result<Vec<SnackCollection>, ApiError> {
    debug!(snack_id, "get_related command");
    Ok(catalog.snacks().related(SnackId::new(snack_id))?)
}

pub fn get_feed(catalog: &Catalog) -> Result<FeedResponse, ApiError> {
    debug!("get_feed command");
    Ok(FeedResponse {
        filters: catalog.filters().snack_filters()?.filters().to_vec(),
        collections: catalog.snacks().collections()?,
    })
}

/// The "Inspired by your cart" row under the cart, if any.
pub fn get_inspired_by_cart(catalog: &Catalog) -> Result<Option<SnackCollection>, ApiError> {
    debug!("get_inspired_by_cart command");
    Ok(catalog.snacks().inspired_by_cart()?)
}
