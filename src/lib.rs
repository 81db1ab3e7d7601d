pub mod booking;
pub mod errors;
pub mod fields;
pub mod gateway;
#[cfg(feature = "native")]
pub mod http;
pub mod models;
pub mod request;
pub mod roadmap;
pub mod segment;
pub mod session;
pub mod topics;

pub use errors::AppError;
pub use gateway::{ApiConfig, CareerGateway};
pub use session::MentorSession;
pub use topics::{Topic, TopicId, TOPICS};
