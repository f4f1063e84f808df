pub(crate) mod gateway;
pub(crate) mod normalize;
pub(crate) mod resource;

pub use gateway::{CourseGateway, Gateway, ProfessorGateway, StudentGateway};
pub use normalize::normalize_key;
pub use resource::Resource;
