// src/store/products.rs
//
// All catalog reads go through here. Every query sees only is_active = TRUE
// rows; filter and sort parameters are normalized once before any SQL is
// built.
use serde_json::json;
use sqlx::PgPool;

use crate::models::category::CategoryCount;
use crate::models::product::Product;

pub const PER_PAGE: i64 = 12;

// Shared select list: NUMERIC columns come back as FLOAT8, tags always as a JSONB array
const PRODUCT_COLUMNS: &str = "id, name, description, \
     price::FLOAT8 AS price, \
     original_price::FLOAT8 AS original_price, \
     image_url, \
     rating::FLOAT8 AS rating, \
     review_count, category, shopee_url, shopee_product_id, is_active, \
     COALESCE(tags, '[]'::jsonb) AS tags, \
     created_at, updated_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Price,
    Rating,
    CreatedAt,
}

impl SortField {
    // Unrecognized sort fields silently fall back to the newest-first default
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => SortField::Name,
            Some("price") => SortField::Price,
            Some("rating") => SortField::Rating,
            _ => SortField::CreatedAt,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Rating => "rating",
            SortField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductFilter {
    // Placeholders are numbered in the same order the binds are applied below
    fn where_clause(&self) -> String {
        let mut clauses = vec!["is_active = TRUE".to_string()];
        let mut param = 0;
        if self.category.is_some() {
            param += 1;
            clauses.push(format!("category = ${param}"));
        }
        if self.search.is_some() {
            param += 1;
            clauses.push(format!("name ILIKE ${param}"));
        }
        clauses.join(" AND ")
    }
}

// GET /products backing query: one filtered/sorted page plus the total for
// the paginator. Pages past the end just come back empty.
pub async fn list_active(
    pool: &PgPool,
    filter: &ProductFilter,
    sort: SortField,
    order: SortOrder,
    page: i64,
) -> Result<(Vec<Product>, i64), sqlx::Error> {
    let where_clause = filter.where_clause();

    let count_sql = format!("SELECT COUNT(*) FROM products WHERE {where_clause}");
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    if let Some(category) = &filter.category {
        count_query = count_query.bind(category);
    }
    if let Some(search) = &filter.search {
        count_query = count_query.bind(format!("%{search}%"));
    }
    let total = count_query.fetch_one(pool).await?;

    let offset = (page - 1) * PER_PAGE;
    let select_sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE {where_clause} \
         ORDER BY {} {} LIMIT {PER_PAGE} OFFSET {offset}",
        sort.column(),
        order.as_str(),
    );
    let mut select_query = sqlx::query_as::<_, Product>(&select_sql);
    if let Some(category) = &filter.category {
        select_query = select_query.bind(category);
    }
    if let Some(search) = &filter.search {
        select_query = select_query.bind(format!("%{search}%"));
    }
    let items = select_query.fetch_all(pool).await?;

    Ok((items, total))
}

// None for unknown ids and for inactive products alike; detail pages never
// reveal deactivated rows
pub async fn find_active(pool: &PgPool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND is_active = TRUE");
    sqlx::query_as::<_, Product>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn related(
    pool: &PgPool,
    category: &str,
    exclude_id: i64,
    limit: i64,
) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products \
         WHERE is_active = TRUE AND category = $1 AND id <> $2 \
         ORDER BY id LIMIT $3"
    );
    sqlx::query_as::<_, Product>(&sql)
        .bind(category)
        .bind(exclude_id)
        .bind(limit)
        .fetch_all(pool)
        .await
}

// Tag membership is exact string equality, evaluated as JSONB containment
pub async fn list_by_tag(pool: &PgPool, tag: &str, limit: i64) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products \
         WHERE is_active = TRUE AND tags @> $1 \
         ORDER BY created_at DESC LIMIT $2"
    );
    sqlx::query_as::<_, Product>(&sql)
        .bind(json!(tag))
        .bind(limit)
        .fetch_all(pool)
        .await
}

// Home page hero strip: anything tagged trending or bestseller, best rated
// first, id as the stable tie-break
pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products \
         WHERE is_active = TRUE AND (tags @> $1 OR tags @> $2) \
         ORDER BY rating DESC, id LIMIT $3"
    );
    sqlx::query_as::<_, Product>(&sql)
        .bind(json!("trending"))
        .bind(json!("bestseller"))
        .bind(limit)
        .fetch_all(pool)
        .await
}

// Steepest discounts first; rows where original_price is missing or not
// above price carry no discount and are excluded outright
pub async fn top_discounts(pool: &PgPool, limit: i64) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM products \
         WHERE is_active = TRUE AND original_price IS NOT NULL AND original_price > price \
         ORDER BY (original_price - price) / original_price DESC, id LIMIT $1"
    );
    sqlx::query_as::<_, Product>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn category_counts(pool: &PgPool, limit: i64) -> Result<Vec<CategoryCount>, sqlx::Error> {
    sqlx::query_as::<_, CategoryCount>(
        "SELECT category, COUNT(*) AS product_count FROM products \
         WHERE is_active = TRUE \
         GROUP BY category ORDER BY product_count DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT category FROM products WHERE is_active = TRUE ORDER BY category",
    )
    .fetch_all(pool)
    .await
}

pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE is_active = TRUE")
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_parses_known_columns() {
        assert_eq!(SortField::parse(Some("name")), SortField::Name);
        assert_eq!(SortField::parse(Some("price")), SortField::Price);
        assert_eq!(SortField::parse(Some("rating")), SortField::Rating);
        assert_eq!(SortField::parse(Some("created_at")), SortField::CreatedAt);
    }

    #[test]
    fn unknown_sort_field_falls_back_to_created_at() {
        assert_eq!(SortField::parse(Some("price; DROP TABLE products")), SortField::CreatedAt);
        assert_eq!(SortField::parse(Some("")), SortField::CreatedAt);
        assert_eq!(SortField::parse(None), SortField::CreatedAt);
    }

    #[test]
    fn unknown_sort_order_falls_back_to_desc() {
        assert_eq!(SortOrder::parse(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("sideways")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(None), SortOrder::Desc);
    }

    #[test]
    fn where_clause_without_filters_only_gates_active() {
        let filter = ProductFilter::default();
        assert_eq!(filter.where_clause(), "is_active = TRUE");
    }

    #[test]
    fn where_clause_numbers_binds_in_order() {
        let filter = ProductFilter {
            category: Some("Elektronik".to_string()),
            search: Some("kaos".to_string()),
        };
        assert_eq!(
            filter.where_clause(),
            "is_active = TRUE AND category = $1 AND name ILIKE $2"
        );
    }

    #[test]
    fn where_clause_search_alone_starts_at_one() {
        let filter = ProductFilter {
            category: None,
            search: Some("kaos".to_string()),
        };
        assert_eq!(filter.where_clause(), "is_active = TRUE AND name ILIKE $1");
    }
}
