//! Query parameter types for the list endpoint.

use iris_admin_core::error::CoreError;
use iris_admin_core::listing::{self, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use iris_admin_db::models::category_type::TypeListQuery;
use serde::Deserialize;

/// `?offset=&limit=&searchStr=&orderBy=`
///
/// Numbers are kept as strings so a bad value falls back to its default
/// instead of rejecting the request. `offset` is a 1-based page number.
#[derive(Debug, Default, Deserialize)]
pub struct ListTypesParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "searchStr")]
    pub search_str: Option<String>,
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,
}

impl ListTypesParams {
    pub fn to_list_query(&self) -> Result<TypeListQuery, CoreError> {
        let page = listing::parse_int_or(self.offset.as_deref(), DEFAULT_PAGE);
        let limit = listing::parse_int_or(self.limit.as_deref(), DEFAULT_PAGE_SIZE);

        TypeListQuery::from_params(
            self.search_str.as_deref(),
            self.order_by.as_deref(),
            page,
            limit,
        )
    }
}
