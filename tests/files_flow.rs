mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{read_json, TestApp};
use editorial_tracker::models::{File, Role, User};
use editorial_tracker::store::Integrity;
use serde_json::json;

fn file_payload(id: i64, folder_id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "folder_id": folder_id,
        "name": format!("Documento {id}"),
        "state": "ASIGNADO",
        "assigned_to": "Diseñador A",
        "state_started_at": "2025-03-01T10:00:00"
    })
}

#[tokio::test]
async fn lists_exactly_the_files_of_a_folder_in_order() -> Result<()> {
    let app = TestApp::new()?;

    for (id, folder_id) in [(1, 1), (2, 2), (3, 1), (4, 3), (5, 1)] {
        let response = app
            .post_json("/files", &file_payload(id, folder_id), Some("whatever"))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let files: Vec<File> = read_json(app.get("/files/1", None).await?).await?;
    let ids: Vec<i64> = files.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);
    assert!(files.iter().all(|f| f.folder_id == 1));

    let none: Vec<File> = read_json(app.get("/files/77", None).await?).await?;
    assert!(none.is_empty());
    Ok(())
}

#[tokio::test]
async fn created_file_is_returned_unchanged() -> Result<()> {
    let app = TestApp::new()?;
    let payload = file_payload(10, 99);

    let response = app.post_json("/files", &payload, None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let created: serde_json::Value = read_json(response).await?;
    assert_eq!(created, payload);
    Ok(())
}

#[tokio::test]
async fn team_members_are_forbidden_to_create_files() -> Result<()> {
    for role in [Role::Gif, Role::Editorial] {
        let app = TestApp::acting_as(User {
            id: 50,
            name: "Member".to_string(),
            role,
        });
        let response = app.post_json("/files", &file_payload(1, 1), None).await?;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let files: Vec<File> = read_json(app.get("/files/1", None).await?).await?;
        assert!(files.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn strict_integrity_requires_an_existing_folder() -> Result<()> {
    let app = TestApp::with_data(Vec::new(), Vec::new(), Integrity::Strict)?;

    let response = app.post_json("/files", &file_payload(1, 1), None).await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let folder = json!({
        "id": 1,
        "name": "Unidad",
        "state": "CREADA_GIF",
        "owner_team": "gif",
        "state_started_at": "2025-03-01T09:00:00"
    });
    assert_eq!(
        app.post_json("/folders", &folder, None).await?.status(),
        StatusCode::OK
    );
    assert_eq!(
        app.post_json("/files", &file_payload(1, 1), None)
            .await?
            .status(),
        StatusCode::OK
    );
    Ok(())
}

#[tokio::test]
async fn non_numeric_folder_id_is_rejected() -> Result<()> {
    let app = TestApp::new()?;
    let response = app.get("/files/abc", None).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn offset_timestamps_are_stored_as_utc() -> Result<()> {
    let app = TestApp::new()?;
    let mut payload = file_payload(1, 1);
    payload["state_started_at"] = json!("2025-03-01T08:00:00-02:00");

    let response = app.post_json("/files", &payload, None).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let created: File = read_json(response).await?;
    assert_eq!(created.state_started_at.to_string(), "2025-03-01 10:00:00");
    Ok(())
}
