// Service exports
pub mod books;
pub mod error;
pub mod omdb;
pub mod places;
pub mod spotify;
pub mod youtube;

pub use books::BooksClient;
pub use error::ProviderError;
pub use omdb::OmdbClient;
pub use places::{PlacesClient, STRATEGY_COORDINATE, STRATEGY_TEXT};
pub use spotify::{SpotifyClient, SpotifyCredentials};
pub use youtube::YoutubeClient;
