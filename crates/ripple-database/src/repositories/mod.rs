//! Repository implementations, one per table.

pub mod experience;
pub mod follow;
pub mod user;
pub mod video;

pub use experience::ExperienceRepository;
pub use follow::FollowRepository;
pub use user::UserRepository;
pub use video::VideoRepository;
