//! Validation chains and handlers for orders

use super::model::{Order, OrderFields, OrderStatus};
use crate::core::validation::validators::{as_positive_integer, is_truthy};
use crate::core::validation::{BodyIdMatchesRoute, Exists, RequireField, RouteIdMatchesRecord};
use crate::core::{ApiError, Chain, Pipeline, Reply, RequestContext};
use crate::resources::ResourcePipelines;
use crate::resources::handlers::{read_located, remove_located};
use serde_json::Value;

const STATUS_REQUIRED: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";
const DELIVERED_IS_FINAL: &str = "A delivered order cannot be changed";
const PENDING_ONLY_DELETE: &str = "An order cannot be deleted unless it is pending";

/// 400 unless `dishes` is a non-empty array
pub fn has_dishes(ctx: &mut RequestContext<'_, Order>) -> Result<(), ApiError> {
    let dishes = ctx.field("dishes");
    if !is_truthy(dishes) {
        return Err(ApiError::validation("Order must include a dish"));
    }
    match dishes.as_array() {
        Some(items) if !items.is_empty() => Ok(()),
        _ => Err(ApiError::validation("Order must include at least one dish")),
    }
}

/// 400 for the first line item whose quantity is not a positive integer
pub fn valid_quantities(ctx: &mut RequestContext<'_, Order>) -> Result<(), ApiError> {
    let items = ctx
        .field("dishes")
        .as_array()
        .ok_or_else(|| ApiError::validation("Order must include at least one dish"))?;

    for (index, item) in items.iter().enumerate() {
        if item.get("quantity").and_then(as_positive_integer).is_none() {
            return Err(ApiError::validation(format!(
                "Dish {} must have a quantity that is an integer greater than 0",
                index
            )));
        }
    }
    Ok(())
}

/// Create: a status is optional, but when given it must be a known one
pub fn known_status_if_present(ctx: &mut RequestContext<'_, Order>) -> Result<(), ApiError> {
    let status = ctx.field("status");
    if !is_truthy(status) {
        return Ok(());
    }
    match status.as_str().and_then(OrderStatus::parse) {
        Some(_) => Ok(()),
        None => Err(ApiError::validation(STATUS_REQUIRED)),
    }
}

/// Update: the new status must be given and known, and delivered orders are final
pub fn status_transition(ctx: &mut RequestContext<'_, Order>) -> Result<(), ApiError> {
    let requested = match ctx.field("status") {
        Value::String(s) if s != "invalid" => OrderStatus::parse(s),
        _ => None,
    }
    .ok_or_else(|| ApiError::validation(STATUS_REQUIRED))?;

    if requested.is_terminal() || ctx.located()?.status.is_terminal() {
        return Err(ApiError::validation(DELIVERED_IS_FINAL));
    }
    Ok(())
}

/// Delete: only pending orders may be removed
pub fn is_pending(ctx: &mut RequestContext<'_, Order>) -> Result<(), ApiError> {
    if ctx.located()?.status == OrderStatus::Pending {
        Ok(())
    } else {
        Err(ApiError::validation(PENDING_ONLY_DELETE))
    }
}

/// Contact fields, then the dish list, then every line item's quantity
fn with_order_fields(chain: Chain<Order>) -> Chain<Order> {
    chain
        .then(RequireField::text("deliverTo"))
        .then(RequireField::text("mobileNumber"))
        .then(has_dishes)
        .then(valid_quantities)
}

fn create(ctx: &mut RequestContext<'_, Order>) -> Result<Reply, ApiError> {
    let order = OrderFields::from_data(ctx.data())?.into_order(ctx.next_id());
    tracing::info!(id = %order.id, status = %order.status, dishes = order.dishes.len(), "order created");
    ctx.records_mut().push(order.clone());
    Reply::created(&order)
}

fn update(ctx: &mut RequestContext<'_, Order>) -> Result<Reply, ApiError> {
    let fields = OrderFields::from_data(ctx.data())?;
    let order = ctx.located_mut()?;
    order.apply(fields);
    Reply::ok(&*order)
}

/// Build the order pipelines
///
/// - create: deliverTo, mobileNumber, dishes, quantities, status
/// - update: exists, the create field checks, route id matches record,
///   body id matches route, status transition
/// - read: exists
/// - delete: exists, pending only
pub fn pipelines() -> ResourcePipelines<Order> {
    ResourcePipelines {
        create: Pipeline::new(
            "create",
            with_order_fields(Chain::new()).then(known_status_if_present),
            create,
        ),
        read: Pipeline::new("read", Chain::<Order>::new().then(Exists), read_located::<Order>),
        update: Pipeline::new(
            "update",
            with_order_fields(Chain::<Order>::new().then(Exists))
                .then(RouteIdMatchesRecord)
                .then(BodyIdMatchesRoute)
                .then(status_transition),
            update,
        ),
        delete: Pipeline::new(
            "delete",
            Chain::<Order>::new().then(Exists).then(is_pending),
            remove_located::<Order>,
        ),
    }
}
