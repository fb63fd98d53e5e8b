//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! These traits are generic over any SeaORM entity and provide the
//! primitive operations concrete repositories compose.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder,
    Value,
};
use std::fmt::Debug;

use crate::errors::AppResult;

/// Read operations (Query) - Single Responsibility
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Find the first row matching `condition`, lowest primary key first
    async fn find_first(&self, condition: Condition) -> AppResult<Option<E::Model>> {
        let mut query = E::find().filter(condition);
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        query.one(self.db()).await.map_err(Into::into)
    }
}

/// Write operations (Command) - Single Responsibility
#[async_trait]
pub trait WriteRepository<E, M, A>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Insert new entity, returning the row as stored
    async fn insert(&self, model: A) -> AppResult<M>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        model.insert(self.db()).await.map_err(Into::into)
    }

    /// Overwrite one column on every row matching `condition`.
    ///
    /// Returns the number of rows touched; zero is not an error.
    async fn update_column_where(
        &self,
        column: E::Column,
        value: Value,
        condition: Condition,
    ) -> AppResult<u64> {
        let result = E::update_many()
            .col_expr(column, Expr::value(value))
            .filter(condition)
            .exec(self.db())
            .await?;

        Ok(result.rows_affected)
    }
}

/// Delete operations - Single Responsibility
#[async_trait]
pub trait DeleteRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Delete entity by primary key, returning the rows affected (0 or 1)
    async fn delete_by_pk(&self, id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType) -> AppResult<u64>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Clone + Send + Debug,
    {
        let result = E::delete_by_id(id).exec(self.db()).await?;
        Ok(result.rows_affected)
    }
}
