//! Order record, its status and line items

use crate::core::validation::validators::as_positive_integer;
use crate::core::{ApiError, Record};
use crate::resources::text_field;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle of an order. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// No further changes are allowed once an order reaches this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an order's dish list
///
/// Carries the dish reference (`id` plus whatever dish details the client
/// sent) and a positive quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub quantity: u64,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

impl OrderLineItem {
    /// Id of the referenced dish, when it is a string
    pub fn dish_id(&self) -> Option<&str> {
        self.dish.get("id").and_then(Value::as_str)
    }

    /// Build from a validated request item
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        let mut dish = value
            .as_object()
            .cloned()
            .ok_or_else(|| ApiError::internal("line item was not validated"))?;
        let quantity = dish
            .remove("quantity")
            .as_ref()
            .and_then(as_positive_integer)
            .ok_or_else(|| ApiError::internal("quantity was not validated"))?;

        Ok(Self { quantity, dish })
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLineItem>,
}

impl Record for Order {
    const KIND: &'static str = "Order";

    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// The mutable fields of an order, read from validated request data
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    /// `None` when the request carried no status
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLineItem>,
}

impl OrderFields {
    pub fn from_data(data: &Value) -> Result<Self, ApiError> {
        let dishes = data
            .get("dishes")
            .and_then(Value::as_array)
            .ok_or_else(|| ApiError::internal("dishes were not validated"))?
            .iter()
            .map(OrderLineItem::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            deliver_to: text_field(data, "deliverTo")?,
            mobile_number: text_field(data, "mobileNumber")?,
            status: data
                .get("status")
                .and_then(Value::as_str)
                .and_then(OrderStatus::parse),
            dishes,
        })
    }

    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status.unwrap_or_default(),
            dishes: self.dishes,
        }
    }
}

impl Order {
    /// Overwrite every mutable field; the id never changes
    pub fn apply(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        if let Some(status) = fields.status {
            self.status = status;
        }
        self.dishes = fields.dishes;
    }
}
