//! HTTP-level integration tests for `/api/v1/pokemon`: creation with links,
//! lookups, rating, cascading delete and link maintenance.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_pokemon_links_owner_and_category(pool: PgPool) {
    let country_id = common::create_country(&pool, "USA").await;
    let owner_id = common::create_owner(&pool, country_id, "Aimenov").await;
    let category_id = common::create_category(&pool, "Fiery").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/pokemon?owner_id={owner_id}&category_id={category_id}"),
        json!({ "name": "Pikachu", "birth_date": "2001-12-07" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Pikachu");
    assert_eq!(json["data"]["birth_date"], "2001-12-07");
    let pokemon_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/pokemon/{pokemon_id}/owners")).await).await;
    assert_eq!(json["data"][0]["id"], owner_id);

    let app = common::build_test_app(pool);
    let json =
        body_json(get(app, &format!("/api/v1/categories/{category_id}/pokemon")).await).await;
    assert_eq!(json["data"][0]["id"], pokemon_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_pokemon_with_unknown_owner_returns_404(pool: PgPool) {
    let category_id = common::create_category(&pool, "Fiery").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/pokemon?owner_id=999999&category_id={category_id}"),
        json!({ "name": "Charmander", "birth_date": "2001-01-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/pokemon").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_pokemon_without_query_params_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/pokemon",
        json!({ "name": "Charmander", "birth_date": "2001-01-01" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_pokemon_name_returns_400(pool: PgPool) {
    let owner_country = common::create_country(&pool, "Kanto").await;
    let owner_id = common::create_owner(&pool, owner_country, "Ketchum").await;
    let category_id = common::create_category(&pool, "Electric").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/pokemon?owner_id={owner_id}&category_id={category_id}"),
        json!({ "name": " ", "birth_date": "2001-01-01" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/pokemon").await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_birth_date_returns_400(pool: PgPool) {
    let (_, owner_id, category_id) = common::create_pokemon_fixture(&pool, "Eevee").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/pokemon?owner_id={owner_id}&category_id={category_id}"),
        json!({ "name": "Vaporeon", "birth_date": "not a date" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_pokemon_name_returns_422(pool: PgPool) {
    let (_, owner_id, category_id) = common::create_pokemon_fixture(&pool, "PIKACHU").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/pokemon?owner_id={owner_id}&category_id={category_id}"),
        json!({ "name": " Pikachu ", "birth_date": "2001-12-07" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Pokemon with the same name already exists");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/pokemon").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_pokemon_by_name(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Herychu").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/pokemon/by-name/Herychu").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], pokemon_id);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pokemon/by-name/Missingno").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_pokemon(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Pichu").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/pokemon/{pokemon_id}"),
        json!({ "id": pokemon_id, "name": "Raichu", "birth_date": "2010-01-02" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/pokemon/{pokemon_id}")).await).await;
    assert_eq!(
        json["data"],
        json!({ "id": pokemon_id, "name": "Raichu", "birth_date": "2010-01-02" })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_pokemon_id_mismatch_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/pokemon/999999",
        json!({ "id": 5, "name": "Ghost", "birth_date": "2010-01-02" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_without_reviews_is_zero(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Ditto").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/pokemon/{pokemon_id}/rating")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["rating"], 0);
    assert_eq!(json["data"]["review_count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_is_integer_mean(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Snorlax").await;
    let reviewer_id = common::create_reviewer(&pool, "Becker").await;
    for (title, rating) in [("Great", 5), ("Okay", 3), ("Good", 4)] {
        common::create_review(&pool, pokemon_id, reviewer_id, title, rating).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/pokemon/{pokemon_id}/rating")).await).await;

    assert_eq!(json["data"]["pokemon_id"], pokemon_id);
    assert_eq!(json["data"]["rating"], 4);
    assert_eq!(json["data"]["review_count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_of_unknown_pokemon_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pokemon/999999/rating").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_pokemon_deletes_its_reviews(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Mew").await;
    let (other_id, _, _) = common::create_pokemon_fixture(&pool, "Mewtwo").await;
    let reviewer_id = common::create_reviewer(&pool, "Fuji").await;
    common::create_review(&pool, pokemon_id, reviewer_id, "First", 5).await;
    common::create_review(&pool, pokemon_id, reviewer_id, "Second", 4).await;
    let kept = common::create_review(&pool, other_id, reviewer_id, "Other", 3).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/pokemon/{pokemon_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], "Successfully deleted");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/pokemon/{pokemon_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/reviews").await).await;
    let reviews = json["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["id"], kept);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_pokemon_without_reviews(pool: PgPool) {
    let (pokemon_id, owner_id, _) = common::create_pokemon_fixture(&pool, "Magikarp").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/pokemon/{pokemon_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The owner survives; only the link is gone.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/owners/{owner_id}/pokemon")).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_unknown_pokemon_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/pokemon/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_linking_category_twice_keeps_both_links(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Psyduck").await;
    let category_id = common::create_category(&pool, "Aquatic").await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = post(
            app,
            &format!("/api/v1/pokemon/{pokemon_id}/categories/{category_id}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let app = common::build_test_app(pool.clone());
    let json =
        body_json(get(app, &format!("/api/v1/categories/{category_id}/pokemon")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/v1/pokemon/{pokemon_id}/categories/{category_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json =
        body_json(get(app, &format!("/api/v1/categories/{category_id}/pokemon")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unlinking_missing_link_returns_500(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Slowpoke").await;
    let category_id = common::create_category(&pool, "Psychic").await;

    let app = common::build_test_app(pool);
    let response = delete(
        app,
        &format!("/api/v1/pokemon/{pokemon_id}/categories/{category_id}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PERSISTENCE_FAILURE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_unknown_category_returns_404(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Onix").await;

    let app = common::build_test_app(pool);
    let response = post(app, &format!("/api/v1/pokemon/{pokemon_id}/categories/999999")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_and_remove_owner(pool: PgPool) {
    let (pokemon_id, _, _) = common::create_pokemon_fixture(&pool, "Togepi").await;
    let country_id = common::create_country(&pool, "Johto").await;
    let second_owner = common::create_owner(&pool, country_id, "Waterflower").await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("/api/v1/pokemon/{pokemon_id}/owners/{second_owner}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/pokemon/{pokemon_id}/owners")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool.clone());
    let response =
        delete(app, &format!("/api/v1/pokemon/{pokemon_id}/owners/{second_owner}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/owners/{second_owner}/pokemon")).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
