pub mod booking;
pub mod fields;
pub mod mentor;
pub mod nav;
pub mod response;
pub mod roadmap;
pub mod stories;
