//! Comment entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_name: String,
    #[sea_orm(column_type = "Text")]
    pub comment_text: String,
    pub post_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for postboard_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_name: model.user_name,
            comment_text: model.comment_text,
            post: model.post_id,
        }
    }
}

impl From<postboard_core::domain::Comment> for ActiveModel {
    fn from(comment: postboard_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            user_name: Set(comment.user_name),
            comment_text: Set(comment.comment_text),
            post_id: Set(comment.post),
        }
    }
}
