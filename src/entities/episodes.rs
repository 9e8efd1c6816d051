use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "episodes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub date: Date,
    pub number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appearances::Entity")]
    Appearances,
}

impl Related<super::appearances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appearances.def()
    }
}

impl Related<super::guests::Entity> for Entity {
    fn to() -> RelationDef {
        super::appearances::Relation::Guest.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::appearances::Relation::Episode.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
