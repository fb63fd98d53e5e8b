//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use crate::domain::{NewUser, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub creation_date: DateTime,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub birthday: Date,
    pub password: String,
    pub status: i16,
    pub avatar_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            creation_date: model.creation_date.and_utc(),
            name: model.name,
            surname: model.surname,
            username: model.username,
            email: model.email,
            birthday: model.birthday,
            password: model.password,
            status: model.status,
            avatar_url: model.avatar_url,
        }
    }
}

/// Build an insertable row; omitted fields stay `NotSet` so the
/// column defaults of the table apply.
impl From<NewUser> for ActiveModel {
    fn from(input: NewUser) -> Self {
        ActiveModel {
            id: ActiveValue::NotSet,
            creation_date: ActiveValue::NotSet,
            name: set_if_present(input.name),
            surname: set_if_present(input.surname),
            username: set_if_present(input.username),
            email: set_if_present(input.email),
            birthday: set_if_present(input.birthday),
            password: set_if_present(input.password),
            status: set_if_present(input.status),
            avatar_url: set_if_present(input.avatar_url.map(Some)),
        }
    }
}

fn set_if_present<V: Into<Value>>(value: Option<V>) -> ActiveValue<V> {
    match value {
        Some(v) => ActiveValue::Set(v),
        None => ActiveValue::NotSet,
    }
}
