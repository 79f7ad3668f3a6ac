use sqlx::PgPool;
use pokedex_db::repositories::{CategoryRepo, PokemonRepo, ReviewRepo};

/// Seeding an empty database inserts the three demo pokemon with their links.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_populates_empty_database(pool: PgPool) {
    assert!(pokedex_db::seed::seed_demo_data(&pool).await.unwrap());

    let pokemon = PokemonRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = pokemon.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Pikachu", "Herychu", "Poschu"]);

    let categories = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(categories.len(), 3);

    let pikachu = PokemonRepo::find_by_name(&pool, "Pikachu").await.unwrap().unwrap();
    let reviews = ReviewRepo::list_by_pokemon(&pool, pikachu.id).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].rating, 5);
}

/// A second run is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    assert!(pokedex_db::seed::seed_demo_data(&pool).await.unwrap());
    assert!(!pokedex_db::seed::seed_demo_data(&pool).await.unwrap());

    assert_eq!(PokemonRepo::list(&pool).await.unwrap().len(), 3);
}
