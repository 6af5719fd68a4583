use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_single_byte() {
    assert_eq!(bytes_to_hex(&[0xff]), "ff");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
}

#[test]
fn generate_token_all_valid_hex() {
    let token = generate_token();
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
}

// =============================================================================
// live session round trip (requires DATABASE_URL)
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
        PgPoolOptions::new().max_connections(2).connect(&url).await.expect("connect")
    }

    async fn seed_user(pool: &PgPool) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, email, name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(format!("{id}@test.example"))
            .bind("test user")
            .execute(pool)
            .await
            .expect("seed user");
        id
    }

    #[tokio::test]
    async fn create_then_validate_returns_principal() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;

        let token = create_session(&pool, user_id).await.expect("create session");
        let principal = validate_session(&pool, &token).await.expect("validate").expect("present");
        assert_eq!(principal.id, user_id);
    }

    #[tokio::test]
    async fn deleted_session_no_longer_validates() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;

        let token = create_session(&pool, user_id).await.expect("create session");
        delete_session(&pool, &token).await.expect("delete");
        let principal = validate_session(&pool, &token).await.expect("validate");
        assert!(principal.is_none());
    }

    #[tokio::test]
    async fn unknown_token_is_absent_not_error() {
        let pool = test_pool().await;
        let principal = validate_session(&pool, "not-a-real-token").await.expect("validate");
        assert!(principal.is_none());
    }
}
