//! Cart lifecycle and cart/product membership.
//!
//! Membership is a set stored in `cart_products`. Add and remove run as one
//! transaction that opens with a write on the cart row, checks both ends of
//! the edge exist, mutates the edge and reloads the cart before committing, so
//! the response always reflects the committed membership.

use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, OnConflict, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    dto::cart::AddToCartRequest,
    entity::{
        Categories, Products,
        cart_products::{self, Column as MemberCol, Entity as CartProducts},
        carts::{self, ActiveModel as CartActive, Column as CartCol, Entity as Carts},
        products::Column as ProdCol,
    },
    error::{AppError, AppResult},
    models::{Cart, Product},
    state::AppState,
};

pub async fn create_cart(state: &AppState) -> AppResult<Cart> {
    let now = Utc::now().fixed_offset();
    let cart = CartActive {
        id: NotSet,
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.orm)
    .await?;
    tracing::debug!(cart_id = cart.id, "cart created");

    Ok(Cart::from_entity(cart, Vec::new()))
}

pub async fn get_cart(state: &AppState, id: i32) -> AppResult<Cart> {
    let cart = Carts::find_by_id(id).one(&state.orm).await?;
    let cart = match cart {
        Some(c) => c,
        None => return Err(AppError::NotFound("Cart")),
    };
    materialize(&state.orm, cart).await
}

/// Adds a product to the cart. Adding a product that is already a member
/// leaves the membership untouched and still succeeds.
pub async fn add_product(
    state: &AppState,
    cart_id: i32,
    payload: AddToCartRequest,
) -> AppResult<Cart> {
    let txn = state.orm.begin().await?;

    let cart = lock_cart(&txn, cart_id).await?;
    ensure_product(&txn, payload.product_id).await?;

    let inserted = CartProducts::insert(cart_products::ActiveModel {
        cart_id: Set(cart.id),
        product_id: Set(payload.product_id),
    })
    .on_conflict(
        OnConflict::columns([MemberCol::CartId, MemberCol::ProductId])
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(&txn)
    .await?;

    let cart = if inserted > 0 { touch(&txn, cart).await? } else { cart };
    let cart = materialize(&txn, cart).await?;
    txn.commit().await?;

    tracing::debug!(
        cart_id,
        product_id = payload.product_id,
        added = inserted > 0,
        "cart membership add"
    );
    Ok(cart)
}

/// Removes a product from the cart. Both the cart and the product must exist;
/// a product that is not a member is simply left out.
pub async fn remove_product(state: &AppState, cart_id: i32, product_id: i32) -> AppResult<Cart> {
    let txn = state.orm.begin().await?;

    let cart = lock_cart(&txn, cart_id).await?;
    ensure_product(&txn, product_id).await?;

    let result = CartProducts::delete_many()
        .filter(MemberCol::CartId.eq(cart.id))
        .filter(MemberCol::ProductId.eq(product_id))
        .exec(&txn)
        .await?;

    let cart = if result.rows_affected > 0 {
        touch(&txn, cart).await?
    } else {
        cart
    };
    let cart = materialize(&txn, cart).await?;
    txn.commit().await?;

    tracing::debug!(
        cart_id,
        product_id,
        removed = result.rows_affected > 0,
        "cart membership remove"
    );
    Ok(cart)
}

/// Claims the cart row for the rest of the transaction.
///
/// The first statement must be a write: a no-op `UPDATE` takes the row lock on
/// PostgreSQL and the database write lock on SQLite, where a transaction that
/// starts with a read cannot later upgrade once another writer has committed.
async fn lock_cart<C>(conn: &C, id: i32) -> AppResult<carts::Model>
where
    C: ConnectionTrait,
{
    let claimed = Carts::update_many()
        .col_expr(CartCol::Id, SimpleExpr::from(Expr::col(CartCol::Id)))
        .filter(CartCol::Id.eq(id))
        .exec(conn)
        .await?;
    if claimed.rows_affected == 0 {
        return Err(AppError::NotFound("Cart"));
    }

    let cart = Carts::find_by_id(id).one(conn).await?;
    cart.ok_or(AppError::NotFound("Cart"))
}

async fn ensure_product<C>(conn: &C, id: i32) -> AppResult<()>
where
    C: ConnectionTrait,
{
    match Products::find_by_id(id).one(conn).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound("Product")),
    }
}

async fn touch<C>(conn: &C, cart: carts::Model) -> AppResult<carts::Model>
where
    C: ConnectionTrait,
{
    let mut active: CartActive = cart.into();
    active.updated_at = Set(Utc::now().fixed_offset());
    Ok(active.update(conn).await?)
}

async fn materialize<C>(conn: &C, cart: carts::Model) -> AppResult<Cart>
where
    C: ConnectionTrait,
{
    let products = cart
        .find_related(Products)
        .find_also_related(Categories)
        .order_by_asc(ProdCol::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(|(product, category)| Product::from_entity(product, category))
        .collect();

    Ok(Cart::from_entity(cart, products))
}
