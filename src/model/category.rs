//! Category domain models.

use crate::dto::category::CategoryDto;

/// Category with its published-article count, computed at query time rather
/// than stored.
#[derive(Debug, Clone)]
pub struct CategoryWithCount {
    pub category: entity::category::Model,
    pub article_count: u64,
}

impl CategoryWithCount {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.category.id,
            name: self.category.name,
            description: self.category.description,
            icon: self.category.icon,
            sort_order: self.category.sort_order,
            article_count: self.article_count,
        }
    }
}
