//! Integration tests per upload e download delle copertine
//!
//! L'upload è protetto da autenticazione; il download passa dal link
//! firmato che l'API produce quando arricchisce le risposte dei libri.

mod common;

#[cfg(test)]
mod storage_tests {
    use super::common::*;
    use serde_json::{Value, json};
    use sqlx::PgPool;

    const BOUNDARY: &str = "biblioteca-test-boundary";

    fn token() -> String {
        create_test_jwt(2, "user", TEST_JWT_SECRET)
    }

    /// Corpo multipart minimale con un solo campo `file`
    fn multipart_body(file_name: &str, content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_upload_requires_authentication(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/storage/upload")
            .content_type(&multipart_content_type())
            .bytes(multipart_body("cover.png", b"png bytes").into())
            .await;

        response.assert_status_forbidden();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_upload_returns_generated_name(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server
            .post("/storage/upload")
            .authorization_bearer(&token())
            .content_type(&multipart_content_type())
            .bytes(multipart_body("cover.png", b"png bytes").into())
            .await;

        response.assert_status_ok();
        let envelope: Value = response.json();
        assert_eq!(envelope["success"], json!(true));
        let file_name = envelope["data"]["file_name"].as_str().unwrap();
        assert!(file_name.starts_with("book-"));
        assert!(file_name.ends_with(".png"));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_upload_without_file_field(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{BOUNDARY}--\r\n"
        );
        let response = server
            .post("/storage/upload")
            .authorization_bearer(&token())
            .content_type(&multipart_content_type())
            .bytes(body.into_bytes().into())
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users", "catalog")))]
    async fn test_cover_roundtrip_through_book_response(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        // 1. upload della copertina
        let upload: Value = server
            .post("/storage/upload")
            .authorization_bearer(&token())
            .content_type(&multipart_content_type())
            .bytes(multipart_body("rosa.jpg", b"fake jpeg bytes").into())
            .await
            .json();
        let file_name = upload["data"]["file_name"].as_str().unwrap().to_string();

        // 2. la copertina viene agganciata a un libro esistente
        let body = json!({ "cover": file_name, "publisher_id": 1 });
        let updated: Value = server
            .put("/books/1")
            .authorization_bearer(&token())
            .json(&body)
            .await
            .json();

        // 3. la risposta porta il link firmato, non il nome interno
        let link = updated["data"]["cover"].as_str().unwrap();
        assert!(link.contains("/storage/book-"));
        assert!(link.contains("token="));

        // 4. il link scarica i byte originali senza autenticazione
        let path = link
            .strip_prefix("http://localhost:3000")
            .expect("link under the public url");
        let download = server.get(path).await;
        download.assert_status_ok();
        assert_eq!(download.as_bytes().as_ref(), b"fake jpeg bytes");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("users")))]
    async fn test_download_with_bad_token(pool: PgPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server.get("/storage/book-1.jpg?token=garbage").await;

        response.assert_status_unauthorized();
        Ok(())
    }
}
