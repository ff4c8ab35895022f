//! Integration tests per gli endpoints di gestione utenti (solo admin)
//!
//! Test per:
//! - POST /users
//! - GET /users (paginata)
//! - GET /users/{user_id}
//! - GET /users/email/{email}
//! - PUT /users/{user_id} (update parziale)
//! - DELETE /users/{user_id}

mod common;

#[cfg(test)]
mod user_tests {
    use super::common::*;
    use serde_json::{Value, json};
    use sqlx::PgPool;

    fn admin_token() -> String {
        create_test_jwt(1, "admin", TEST_JWT_SECRET)
    }

    fn reader_token() -> String {
        create_test_jwt(2, "user", TEST_JWT_SECRET)
    }

    // ============================================================
    // Controlli di accesso
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_users_requires_admin(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/users")
            .authorization_bearer(&reader_token())
            .await;

        response.assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_users_without_token(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server.get("/users").await;

        response.assert_status_forbidden();
        Ok(())
    }

    // ============================================================
    // Test per GET /users - list_users con paginazione
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_users_first_page(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/users?page=1&limit=2")
            .authorization_bearer(&admin_token())
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        let page = &envelope["data"];
        assert_eq!(page["items"].as_array().unwrap().len(), 2);
        assert_eq!(page["current_page"], json!(1));
        assert_eq!(page["per_page"], json!(2));
        assert_eq!(page["total_items"], json!(3));
        assert_eq!(page["total_pages"], json!(2));
        assert_eq!(page["next_page"], json!(2));
        assert_eq!(page["prev_page"], json!(0));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_users_last_page(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/users?page=2&limit=2")
            .authorization_bearer(&admin_token())
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        let page = &envelope["data"];
        assert_eq!(page["items"].as_array().unwrap().len(), 1);
        assert_eq!(page["next_page"], json!(0));
        assert_eq!(page["prev_page"], json!(1));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_users_defaults_for_garbage_params(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        // page e limit fuori range vengono normalizzati a 1 e 10
        let response = server
            .get("/users?page=0&limit=-5")
            .authorization_bearer(&admin_token())
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        let page = &envelope["data"];
        assert_eq!(page["current_page"], json!(1));
        assert_eq!(page["per_page"], json!(10));
        assert_eq!(page["total_pages"], json!(1));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_list_users_search_filter(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/users?search=rita")
            .authorization_bearer(&admin_token())
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["data"]["total_items"], json!(1));
        assert_eq!(
            envelope["data"]["items"][0]["email"],
            json!("rita@biblioteca.test")
        );

        Ok(())
    }

    // ============================================================
    // Test per GET /users/{user_id} e /users/email/{email}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_get_user_by_id(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/users/2")
            .authorization_bearer(&admin_token())
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["data"]["name"], json!("Rita Reader"));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_get_missing_user_is_not_found(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/users/999")
            .authorization_bearer(&admin_token())
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_get_user_by_email(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .get("/users/email/marco@biblioteca.test")
            .authorization_bearer(&admin_token())
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["data"]["name"], json!("Marco Member"));

        Ok(())
    }

    // ============================================================
    // Test per POST /users - create_user
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_create_user_as_admin(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({
            "name": "Nora New",
            "email": "nora@biblioteca.test",
            "password": "NoraSecret1"
        });
        let response = server
            .post("/users")
            .authorization_bearer(&admin_token())
            .json(&body)
            .await;

        response.assert_status(axum_test::http::StatusCode::CREATED);
        let envelope: Value = response.json();
        // a differenza della register, il nome resta come inviato
        assert_eq!(envelope["data"]["name"], json!("Nora New"));

        Ok(())
    }

    // ============================================================
    // Test per PUT /users/{user_id} - update parziale via merge
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_update_user_merges_partial_body(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        // solo l'email: il nome deve restare quello salvato
        let body = json!({ "email": "new@x.com" });
        let response = server
            .put("/users/2")
            .authorization_bearer(&admin_token())
            .json(&body)
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["data"]["name"], json!("Rita Reader"));
        assert_eq!(envelope["data"]["email"], json!("new@x.com"));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_update_user_with_empty_fields_changes_nothing(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({ "name": "", "email": "" });
        let response = server
            .put("/users/2")
            .authorization_bearer(&admin_token())
            .json(&body)
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["data"]["name"], json!("Rita Reader"));
        assert_eq!(envelope["data"]["email"], json!("rita@biblioteca.test"));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_update_missing_user_is_not_found(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({ "name": "Ghost" });
        let response = server
            .put("/users/999")
            .authorization_bearer(&admin_token())
            .json(&body)
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    // ============================================================
    // Test per DELETE /users/{user_id}
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_delete_user_twice(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .delete("/users/3")
            .authorization_bearer(&admin_token())
            .await;
        response.assert_status_ok();

        // la seconda cancellazione non trova più la riga
        let response = server
            .delete("/users/3")
            .authorization_bearer(&admin_token())
            .await;
        response.assert_status_not_found();

        Ok(())
    }
}
