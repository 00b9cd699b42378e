use chrono::{DateTime, Utc};
use crudkit::crudkit_data::{Entity, Resource, Value};
use garde::Validate;
use serde::{Deserialize, Serialize};

use super::merge;

/// Kept in memory; the catalogue starts with three items.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    #[garde(skip)]
    pub id: i64,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(custom(positive))]
    pub price: f64,
}

impl Product {
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            price,
        }
    }

    pub fn catalogue() -> Vec<Product> {
        vec![
            Product::new("Laptop", 1200.0),
            Product::new("Mouse", 25.0),
            Product::new("Keyboard", 75.0),
        ]
    }
}

/// Front-ends send either `name` or `title`.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct NewProduct {
    #[serde(alias = "title")]
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(custom(positive))]
    pub price: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(alias = "title")]
    pub name: Option<String>,
    pub price: Option<f64>,
}

fn positive(value: &f64, _ctx: &()) -> garde::Result {
    if *value > 0.0 {
        Ok(())
    } else {
        Err(garde::Error::new("must be greater than 0"))
    }
}

impl Entity for Product {
    fn table_name() -> &'static str {
        "products"
    }

    fn columns() -> &'static [&'static str] {
        &["name", "price"]
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![(&self.name).into(), self.price.into()]
    }
}

impl Resource for Product {
    const NAME: &'static str = "Product";
    type Create = NewProduct;
    type Patch = ProductPatch;

    fn from_create(input: NewProduct, _now: DateTime<Utc>) -> Self {
        Self::new(&input.name, input.price)
    }

    fn apply(&mut self, patch: ProductPatch, _now: DateTime<Utc>) {
        merge(&mut self.name, patch.name);
        merge(&mut self.price, patch.price);
    }
}
