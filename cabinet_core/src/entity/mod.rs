// SeaORM entities
// Column mapping for the tables created by `models::migrator`. Domain
// structs live in `models` and convert to and from these.

pub mod attachment;
pub mod columns;
pub mod profile;


pub mod prelude {
    pub use super::attachment::{
        ActiveModel as AttachmentActiveModel, Column as AttachmentColumn,
        Entity as AttachmentEntity, Model as AttachmentModel,
    };
    pub use super::columns::{Metadata, StringList};
    pub use super::profile::{
        ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as ProfileEntity,
        Model as ProfileModel,
    };

    // Re-export commonly used SeaORM types and traits
    pub use sea_orm::{
        ActiveModelTrait,
        ActiveValue,

        ColumnTrait,
        ConnectionTrait,

        // Database and connection types
        Database,
        DatabaseConnection,
        DbConn,
        DbErr,

        // Core traits
        EntityTrait,
        ModelTrait,
        NotSet,
        PaginatorTrait,
        QueryFilter,
        QueryOrder,
        QuerySelect,
        Related,

        // Active model helpers
        Set,
        Unchanged,
    };
}
