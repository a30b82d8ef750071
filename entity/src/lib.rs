pub mod prelude;

pub mod app_user;
pub mod lift;
pub mod resort;
pub mod resort_area;
pub mod resort_member;
pub mod review;
pub mod sea_orm_active_enums;
pub mod trail;
pub mod trail_lift;
pub mod user_resort;
pub mod weather;
