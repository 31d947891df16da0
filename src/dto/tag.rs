use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
    pub article_count: i32,
}
