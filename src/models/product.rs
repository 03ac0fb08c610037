use serde::{Serialize, Serializer};

/// One entry of the demo catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub id: i32,
    pub name: String,
    /// Price stored as integer cents (e.g. 1250 = 12.50), serialized as a
    /// decimal number under `price`.
    #[serde(rename = "price", serialize_with = "cents_as_decimal")]
    pub price_cents: i64,
    pub category: String,
}

impl ProductRecord {
    pub fn new(id: i32, name: &str, price_cents: i64, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price_cents,
            category: category.to_string(),
        }
    }
}

fn cents_as_decimal<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(*cents as f64 / 100.0)
}

/// The fixed three-item catalog, built fresh for every request.
pub fn catalog() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new(1, "Laptop", 99_999, "Electronics"),
        ProductRecord::new(2, "Book", 1_999, "Education"),
        ProductRecord::new(3, "Coffee Mug", 1_250, "Kitchen"),
    ]
}
