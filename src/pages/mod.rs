pub mod dashboard;
pub mod landing;
pub mod upload;
