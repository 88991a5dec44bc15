//! Database repositories
//!
//! Repositories handle all direct database interactions. Functions take an
//! executor so they compose into the services' write transactions.

pub mod category_repo;
pub mod competition_repo;
pub mod photo_repo;
pub mod vote_repo;

pub use category_repo::CategoryRepository;
pub use competition_repo::CompetitionRepository;
pub use photo_repo::PhotoRepository;
pub use vote_repo::VoteRepository;
