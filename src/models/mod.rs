// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BookRecord, CafeRating, CafeRecord, Coordinates, LocationInfo, MovieRecord, PlaylistRecord,
    RecipeRecord,
};
pub use requests::VibeRequest;
pub use responses::{AboutResponse, ErrorResponse, HealthResponse, VibeResponse};
