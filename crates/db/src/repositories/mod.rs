//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Writes report whether they
//! affected any rows; callers decide how to surface a zero-effect write.

pub mod category_repo;
pub mod country_repo;
pub mod owner_repo;
pub mod pokemon_repo;
pub mod review_repo;
pub mod reviewer_repo;

pub use category_repo::CategoryRepo;
pub use country_repo::CountryRepo;
pub use owner_repo::OwnerRepo;
pub use pokemon_repo::PokemonRepo;
pub use review_repo::ReviewRepo;
pub use reviewer_repo::ReviewerRepo;
