//! Validation chains and handlers for dishes

use super::model::{Dish, DishFields};
use crate::config::DishDeletion;
use crate::core::validation::validators::as_positive_integer;
use crate::core::validation::{BodyIdMatchesRoute, Exists, RequireField};
use crate::core::validation::Handler;
use crate::core::{ApiError, Chain, Pipeline, Reply, RequestContext};
use crate::resources::ResourcePipelines;
use crate::resources::handlers::{read_located, remove_located};

/// 400 unless `price` is an integer greater than zero
pub fn valid_price(ctx: &mut RequestContext<'_, Dish>) -> Result<(), ApiError> {
    match as_positive_integer(ctx.field("price")) {
        Some(_) => Ok(()),
        None => Err(ApiError::validation(
            "Dish must have a price that is an integer greater than 0",
        )),
    }
}

/// Required fields, then the price rule
fn with_dish_fields(chain: Chain<Dish>) -> Chain<Dish> {
    chain
        .then(RequireField::text("name"))
        .then(RequireField::text("description"))
        .then(RequireField::present("price"))
        .then(RequireField::text("image_url"))
        .then(valid_price)
}

fn create(ctx: &mut RequestContext<'_, Dish>) -> Result<Reply, ApiError> {
    let dish = DishFields::from_data(ctx.data())?.into_dish(ctx.next_id());
    tracing::info!(id = %dish.id, name = %dish.name, "dish created");
    ctx.records_mut().push(dish.clone());
    Reply::created(&dish)
}

fn update(ctx: &mut RequestContext<'_, Dish>) -> Result<Reply, ApiError> {
    let fields = DishFields::from_data(ctx.data())?;
    let dish = ctx.located_mut()?;
    dish.apply(fields);
    Reply::ok(&*dish)
}

fn delete_disabled(_: &mut RequestContext<'_, Dish>) -> Result<Reply, ApiError> {
    Err(ApiError::method_not_supported("Dish deletion is not supported"))
}

/// Build the dish pipelines
///
/// - create: required fields, price
/// - update: exists, required fields, price, body id matches route
/// - read: exists
/// - delete: exists, then either 405 (deletion disabled) or removal
pub fn pipelines(deletion: DishDeletion) -> ResourcePipelines<Dish> {
    let delete_handler: Handler<Dish> = match deletion {
        DishDeletion::Disabled => delete_disabled,
        DishDeletion::Enabled => remove_located::<Dish>,
    };

    ResourcePipelines {
        create: Pipeline::new("create", with_dish_fields(Chain::new()), create),
        read: Pipeline::new("read", Chain::<Dish>::new().then(Exists), read_located::<Dish>),
        update: Pipeline::new(
            "update",
            with_dish_fields(Chain::<Dish>::new().then(Exists)).then(BodyIdMatchesRoute),
            update,
        ),
        delete: Pipeline::new("delete", Chain::<Dish>::new().then(Exists), delete_handler),
    }
}
