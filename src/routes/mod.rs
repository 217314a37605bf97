pub mod auth;

pub mod users;

pub mod groups;

pub mod lessons;

pub mod homeworks;

pub use auth::configure_auth_routes;
pub use groups::configure_groups_routes;
pub use homeworks::configure_homeworks_routes;
pub use lessons::configure_lessons_routes;
pub use users::configure_user_routes;
