//! Wire models for the Edura REST API.

pub mod auth;
pub mod catalog;
pub mod errors;
pub mod id;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest};
pub use catalog::{BlogPost, Course, EnrollmentResponse, Event, Instructor, Product, Resource};
pub use errors::ErrorResponse;
pub use id::EntityId;
pub use user::UserProfile;
