pub use super::app_user::Entity as AppUser;
pub use super::lift::Entity as Lift;
pub use super::resort::Entity as Resort;
pub use super::resort_area::Entity as ResortArea;
pub use super::resort_member::Entity as ResortMember;
pub use super::review::Entity as Review;
pub use super::trail::Entity as Trail;
pub use super::trail_lift::Entity as TrailLift;
pub use super::user_resort::Entity as UserResort;
pub use super::weather::Entity as Weather;
