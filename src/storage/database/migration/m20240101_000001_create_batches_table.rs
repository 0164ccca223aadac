use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Batches::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Batches::BatchCode).string_len(9).not_null())
                    .col(ColumnDef::new(Batches::StartYear).integer().not_null())
                    .col(ColumnDef::new(Batches::EndYear).integer().not_null())
                    .col(
                        ColumnDef::new(Batches::CourseType)
                            .string_len(20)
                            .not_null()
                            .default("UG"),
                    )
                    .col(
                        ColumnDef::new(Batches::CourseDuration)
                            .integer()
                            .not_null()
                            .default(4),
                    )
                    .col(ColumnDef::new(Batches::DepartmentId).uuid().not_null())
                    .col(
                        ColumnDef::new(Batches::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Batches::IsGraduated)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Batches::AcademicYearStart).date().not_null())
                    .col(ColumnDef::new(Batches::AcademicYearEnd).date().not_null())
                    .col(ColumnDef::new(Batches::CreatedBy).uuid().null())
                    .col(ColumnDef::new(Batches::UpdatedBy).uuid().null())
                    .col(
                        ColumnDef::new(Batches::TotalStudents)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Batches::PlacedStudents)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Batches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Batches::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // One batch per code within a department
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_batches_batch_code_department_id")
                    .table(Batches::Table)
                    .col(Batches::BatchCode)
                    .col(Batches::DepartmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_batch_code")
                    .table(Batches::Table)
                    .col(Batches::BatchCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_department_id")
                    .table(Batches::Table)
                    .col(Batches::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_years")
                    .table(Batches::Table)
                    .col(Batches::StartYear)
                    .col(Batches::EndYear)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_course_type")
                    .table(Batches::Table)
                    .col(Batches::CourseType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_is_active")
                    .table(Batches::Table)
                    .col(Batches::IsActive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_is_graduated")
                    .table(Batches::Table)
                    .col(Batches::IsGraduated)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Batches {
    Table,
    Id,
    BatchCode,
    StartYear,
    EndYear,
    CourseType,
    CourseDuration,
    DepartmentId,
    IsActive,
    IsGraduated,
    AcademicYearStart,
    AcademicYearEnd,
    CreatedBy,
    UpdatedBy,
    TotalStudents,
    PlacedStudents,
    CreatedAt,
    UpdatedAt,
}
