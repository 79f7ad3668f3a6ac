//! Demo data for local development.
//!
//! Populates an empty database with three categories, each holding one
//! pokemon that has one owner (in its own country) and one review.

use pokedex_core::types::DbId;
use sqlx::{PgConnection, PgPool};

struct SeedEntry {
    category: &'static str,
    pokemon: &'static str,
    birth_date: &'static str,
    owner: (&'static str, &'static str, &'static str),
    country: &'static str,
    review: (&'static str, &'static str, i32),
    reviewer: (&'static str, &'static str),
}

const DEMO_DATA: &[SeedEntry] = &[
    SeedEntry {
        category: "Fiery",
        pokemon: "Pikachu",
        birth_date: "2001-12-07",
        owner: ("Timur", "Aimenov", "AAA"),
        country: "USA",
        review: ("Wow", "sasasa", 5),
        reviewer: ("Alan", "Becker"),
    },
    SeedEntry {
        category: "Aquatic",
        pokemon: "Herychu",
        birth_date: "2012-05-01",
        owner: ("Elon", "Musk", "VVV"),
        country: "Canada",
        review: ("SS", "Poer", 5),
        reviewer: ("Cfe", "Vght"),
    },
    SeedEntry {
        category: "Stone",
        pokemon: "Poschu",
        birth_date: "2001-12-07",
        owner: ("Cdfd", "Cefew", "DDD"),
        country: "Russia",
        review: ("Wrr", "cbghg", 5),
        reviewer: ("Vvvfg", "Yrtd"),
    },
];

/// Insert the demo data if the `pokemon` table is empty.
///
/// Returns `true` if rows were inserted, `false` if seeding was skipped.
pub async fn seed_demo_data(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemon")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Skipping demo seed, pokemon table is not empty");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    for entry in DEMO_DATA {
        insert_entry(&mut tx, entry).await?;
    }
    tx.commit().await?;

    tracing::info!(entries = DEMO_DATA.len(), "Demo data seeded");
    Ok(true)
}

async fn insert_entry(conn: &mut PgConnection, entry: &SeedEntry) -> Result<(), sqlx::Error> {
    let category_id: DbId =
        sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(entry.category)
            .fetch_one(&mut *conn)
            .await?;

    let pokemon_id: DbId = sqlx::query_scalar(
        "INSERT INTO pokemon (name, birth_date) VALUES ($1, $2::date) RETURNING id",
    )
    .bind(entry.pokemon)
    .bind(entry.birth_date)
    .fetch_one(&mut *conn)
    .await?;

    let country_id: DbId =
        sqlx::query_scalar("INSERT INTO countries (name) VALUES ($1) RETURNING id")
            .bind(entry.country)
            .fetch_one(&mut *conn)
            .await?;

    let (first_name, last_name, gym) = entry.owner;
    let owner_id: DbId = sqlx::query_scalar(
        "INSERT INTO owners (first_name, last_name, gym, country_id)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(gym)
    .bind(country_id)
    .fetch_one(&mut *conn)
    .await?;

    let (reviewer_first, reviewer_last) = entry.reviewer;
    let reviewer_id: DbId = sqlx::query_scalar(
        "INSERT INTO reviewers (first_name, last_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(reviewer_first)
    .bind(reviewer_last)
    .fetch_one(&mut *conn)
    .await?;

    let (title, text, rating) = entry.review;
    sqlx::query(
        "INSERT INTO reviews (title, text, rating, pokemon_id, reviewer_id)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(title)
    .bind(text)
    .bind(rating)
    .bind(pokemon_id)
    .bind(reviewer_id)
    .execute(&mut *conn)
    .await?;

    sqlx::query("INSERT INTO pokemon_categories (pokemon_id, category_id) VALUES ($1, $2)")
        .bind(pokemon_id)
        .bind(category_id)
        .execute(&mut *conn)
        .await?;

    sqlx::query("INSERT INTO pokemon_owners (pokemon_id, owner_id) VALUES ($1, $2)")
        .bind(pokemon_id)
        .bind(owner_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
