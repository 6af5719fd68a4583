use super::*;

// =============================================================================
// SupplierError
// =============================================================================

#[test]
fn not_found_display_names_the_user() {
    let user_id = Uuid::nil();
    let error = SupplierError::NotFound(user_id);
    assert!(error.to_string().contains(&user_id.to_string()));
}

#[test]
fn database_error_wraps_sqlx() {
    let error = SupplierError::from(sqlx::Error::PoolClosed);
    assert!(matches!(error, SupplierError::Database(_)));
}

#[test]
fn empty_patch_display() {
    assert_eq!(SupplierError::EmptyPatch.to_string(), "empty patch");
}

// =============================================================================
// live CRUD (requires DATABASE_URL)
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use model::SupplierPatch;
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
    async fn fetch_for_user_without_row_is_none() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;
        let record = fetch_for_user(&pool, user_id).await.expect("fetch");
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn create_then_fetch_round_trip() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;

        let created = create(&pool, user_id, "Acme").await.expect("create");
        assert_eq!(created.name, "Acme");
        assert_eq!(created.user_id, user_id);

        let fetched = fetch_for_user(&pool, user_id).await.expect("fetch").expect("present");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Acme");
    }

    #[tokio::test]
    async fn second_create_for_same_user_is_rejected() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;

        create(&pool, user_id, "Acme").await.expect("first create");
        let second = create(&pool, user_id, "Acme Again").await;
        assert!(second.is_err(), "UNIQUE(user_id) must reject a second row");
    }

    #[tokio::test]
    async fn update_patches_only_set_fields() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;
        create(&pool, user_id, "Acme").await.expect("create");

        let patch = SupplierPatch { phone: Some("+1 555 0100".into()), ..SupplierPatch::default() };
        let updated = update(&pool, user_id, &patch).await.expect("update");
        assert_eq!(updated.name, "Acme");
        assert_eq!(updated.phone.as_deref(), Some("+1 555 0100"));
    }

    #[tokio::test]
    async fn update_without_row_is_not_found() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;

        let patch = SupplierPatch { name: Some("Ghost".into()), ..SupplierPatch::default() };
        let result = update(&pool, user_id, &patch).await;
        assert!(matches!(result, Err(SupplierError::NotFound(_))));
    }

    #[tokio::test]
    async fn empty_patch_is_rejected_before_touching_db() {
        let pool = test_pool().await;
        let user_id = seed_user(&pool).await;
        let result = update(&pool, user_id, &SupplierPatch::default()).await;
        assert!(matches!(result, Err(SupplierError::EmptyPatch)));
    }
}
