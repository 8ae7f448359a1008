use sea_orm_migration::prelude::*;

use crate::catalog::{catalog, ddl};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // 按目录顺序建表，再建命名索引
        for schema in catalog() {
            manager
                .create_table(ddl::create_table(schema, backend))
                .await?;
            for index in ddl::create_indexes(schema) {
                manager.create_index(index).await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for schema in catalog().iter().rev() {
            manager.drop_table(ddl::drop_table(schema)).await?;
        }

        Ok(())
    }
}
