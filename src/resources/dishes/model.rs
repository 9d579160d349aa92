//! Dish record

use crate::core::validation::validators::as_positive_integer;
use crate::core::{ApiError, Record};
use crate::resources::text_field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dish on the menu. `price` is a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Record for Dish {
    const KIND: &'static str = "Dish";

    fn resource_name() -> &'static str {
        "dishes"
    }

    fn resource_name_singular() -> &'static str {
        "dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// The mutable fields of a dish, read from validated request data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl DishFields {
    pub fn from_data(data: &Value) -> Result<Self, ApiError> {
        let price = data
            .get("price")
            .and_then(as_positive_integer)
            .ok_or_else(|| ApiError::internal("price was not validated"))?;

        Ok(Self {
            name: text_field(data, "name")?,
            description: text_field(data, "description")?,
            price,
            image_url: text_field(data, "image_url")?,
        })
    }

    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

impl Dish {
    /// Overwrite every mutable field; the id never changes
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data() -> Value {
        json!({
            "name": "Falafel and tahini bagel",
            "description": "A warm bagel filled with falafel and tahini",
            "price": 6,
            "image_url": "https://images.example.com/bagel.jpg",
        })
    }

    #[test]
    fn test_fields_from_data() {
        let fields = DishFields::from_data(&data()).unwrap();
        assert_eq!(fields.name, "Falafel and tahini bagel");
        assert_eq!(fields.price, 6);
    }

    #[test]
    fn test_unvalidated_data_is_internal_error() {
        let err = DishFields::from_data(&json!({ "name": "x" })).unwrap_err();
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut dish = DishFields::from_data(&data()).unwrap().into_dish("d1".to_string());
        let mut changed = data();
        changed["price"] = json!(9);
        changed["name"] = json!("Bagel");

        dish.apply(DishFields::from_data(&changed).unwrap());

        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Bagel");
        assert_eq!(dish.price, 9);
    }

    #[test]
    fn test_serialized_shape() {
        let dish = DishFields::from_data(&data()).unwrap().into_dish("d1".to_string());
        let value = serde_json::to_value(&dish).unwrap();
        assert_eq!(value["id"], "d1");
        assert_eq!(value["image_url"], "https://images.example.com/bagel.jpg");
        assert_eq!(value["price"], 6);
    }
}
