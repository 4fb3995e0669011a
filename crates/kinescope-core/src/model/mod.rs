pub mod entities;
pub mod entry;
pub mod media;
pub mod result;
pub mod vocabulary;

pub use entities::{MatchedEntities, VOCAB_FILM_GENRE, VOCAB_MOVIE_NAME, VOCAB_STREAMING_PROVIDER};
pub use entry::CatalogEntry;
pub use media::{MediaType, PlaybackType};
pub use result::{MediaResult, PlaylistResult};
pub use vocabulary::KeywordVocabulary;
