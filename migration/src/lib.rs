pub use sea_orm_migration::prelude::*;

mod m20251020_000001_resort;
mod m20251020_000002_resort_area;
mod m20251020_000003_resort_member;
mod m20251020_000004_trail;
mod m20251020_000005_lift;
mod m20251020_000006_trail_lift;
mod m20251020_000007_app_user;
mod m20251020_000008_user_resort;
mod m20251020_000009_review;
mod m20251020_000010_weather;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_resort::Migration),
            Box::new(m20251020_000002_resort_area::Migration),
            Box::new(m20251020_000003_resort_member::Migration),
            Box::new(m20251020_000004_trail::Migration),
            Box::new(m20251020_000005_lift::Migration),
            Box::new(m20251020_000006_trail_lift::Migration),
            Box::new(m20251020_000007_app_user::Migration),
            Box::new(m20251020_000008_user_resort::Migration),
            Box::new(m20251020_000009_review::Migration),
            Box::new(m20251020_000010_weather::Migration),
        ]
    }
}
