use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 3.75)]
    pub price: Decimal,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub price: Decimal,
    pub description: &'a str,
    pub created_at: DateTime<Utc>,
}

impl<'a> From<&'a Product> for NewProduct<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: &p.id,
            name: &p.name,
            price: p.price,
            description: &p.description,
            created_at: Utc::now(),
        }
    }
}

impl Product {
    pub fn new(id: &str, name: &str, price: Decimal, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            description: description.to_string(),
        }
    }
}

/// The catalog written on first start and served whenever the database is out of reach.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new("1", "Everything Bagel", dec!(2.50), "Toasted bagel with cream cheese"),
        Product::new(
            "2",
            "Turkey Club Sandwich",
            dec!(8.95),
            "Triple-decker with bacon, lettuce and tomato",
        ),
        Product::new(
            "3",
            "Cold Brew Coffee",
            dec!(3.75),
            "Slow-steeped for 18 hours, served over ice",
        ),
        Product::new("4", "Caesar Salad", dec!(7.50), "Romaine, parmesan and house croutons"),
        Product::new(
            "5",
            "Chocolate Croissant",
            dec!(3.25),
            "Buttery pastry with dark chocolate",
        ),
        Product::new("6", "Fresh Fruit Bowl", dec!(4.95), "Seasonal fruit, cut daily"),
    ]
}
