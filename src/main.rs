use std::env;

use serde_json::{json, Value};

use product_reviews::fixtures::{self, CURRENT_PRODUCT_ID};
use product_reviews::{build_service, init_tracing, AppError, AppResult, ListQuery, ServiceConfig};

/// `product-reviews [product_id] [star] [page] [limit]`
#[tokio::main]
async fn main() -> AppResult<()> {
    let config = ServiceConfig::from_env()?;
    init_tracing("info");
    tracing::info!(user = %config.current_user, "starting review service");

    let args: Vec<String> = env::args().skip(1).collect();
    let product_id = args.first().map(String::as_str).unwrap_or(CURRENT_PRODUCT_ID);
    let mut query = ListQuery::default();
    if let Some(star) = args.get(1) {
        query.star_filter = Some(parse_arg("star", star)?);
    }
    if let Some(page) = args.get(2) {
        query.page = parse_arg("page", page)?;
    }
    if let Some(limit) = args.get(3) {
        query.limit = parse_arg("limit", limit)?;
    }

    let service = build_service(&config).await?;
    let directory = fixtures::user_directory();
    let page = service.list_by_product(product_id, query).await?;

    let reviews = page
        .items
        .iter()
        .map(|review| -> AppResult<Value> {
            let mut value = serde_json::to_value(review)?;
            if let (Value::Object(map), Some(author)) = (&mut value, directory.author_of(review)) {
                map.insert("author".to_string(), serde_json::to_value(author)?);
            }
            Ok(value)
        })
        .collect::<AppResult<Vec<Value>>>()?;

    let output = json!({
        "productId": product_id,
        "page": query.page,
        "limit": query.limit,
        "total": page.total,
        "reviews": reviews,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(name: &str, raw: &str) -> AppResult<T> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("{name} must be a number, got {raw:?}")))
}
