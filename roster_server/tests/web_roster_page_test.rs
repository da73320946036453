
use reqwest::StatusCode;

use roster_app::test_utils::tests::MockUnitOfWorkProvider;
use roster_types::Result;

use crate::test_utils::tests::{player_body, setup_web_app, setup_web_app_with};

#[tokio::test]
async fn test_roster_page_renders_empty_list() -> Result<()> {
    let app = setup_web_app().await?;

    let res = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let html = res.text().await.unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("No players yet."));
    Ok(())
}

#[tokio::test]
async fn test_add_form_creates_player_and_refreshes_list() -> Result<()> {
    let app = setup_web_app().await?;

    // The redirect is followed, so the final page is the re-fetched roster.
    let res = app
        .client
        .post(app.url("/roster"))
        .form(&[
            ("name", "Shubman Gill"),
            ("age", "25"),
            ("role", "Batsman"),
            ("team", "India"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.url().as_str().ends_with("/?notice=added"));

    let html = res.text().await.unwrap();
    assert!(html.contains("Player added successfully"));
    assert!(html.contains("Shubman Gill"));
    assert_eq!(app.provider.players().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_add_form_with_invalid_role_shows_failure() -> Result<()> {
    let app = setup_web_app().await?;

    let res = app
        .client
        .post(app.url("/roster"))
        .form(&[
            ("name", "Shubman Gill"),
            ("age", "25"),
            ("role", "Opener"),
            ("team", "India"),
        ])
        .send()
        .await
        .unwrap();

    let html = res.text().await.unwrap();
    assert!(html.contains("Failed to add player"));
    assert!(app.provider.players().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_edit_form_is_prefilled_and_updates() -> Result<()> {
    let app = setup_web_app().await?;
    let created = app
        .create_player(player_body("Ravindra Jadeja", "All-rounder", "India"))
        .await;
    let id = created["id"].as_str().unwrap();

    let html = app
        .client
        .get(app.url(&format!("/?edit={id}")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Edit Player"));
    assert!(html.contains(&format!("/roster/{id}")));

    let res = app
        .client
        .post(app.url(&format!("/roster/{id}")))
        .form(&[
            ("name", "Ravindra Jadeja"),
            ("age", "35"),
            ("role", "All-rounder"),
            ("team", "Chennai Super Kings"),
        ])
        .send()
        .await
        .unwrap();
    let html = res.text().await.unwrap();

    assert!(html.contains("Player updated successfully"));
    assert!(html.contains("Chennai Super Kings"));
    Ok(())
}

#[tokio::test]
async fn test_delete_button_removes_player() -> Result<()> {
    let app = setup_web_app().await?;
    let created = app
        .create_player(player_body("Mohammed Shami", "Bowler", "India"))
        .await;
    let id = created["id"].as_str().unwrap();

    let html = app
        .client
        .post(app.url(&format!("/roster/{id}/delete")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("Player deleted successfully"));
    assert!(!html.contains("Mohammed Shami"));
    assert!(app.provider.players().is_empty());

    let html = app
        .client
        .post(app.url(&format!("/roster/{id}/delete")))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(html.contains("Failed to delete player"));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_store_shows_fetch_failure() -> Result<()> {
    let app = setup_web_app_with(MockUnitOfWorkProvider::unavailable()).await?;

    let res = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let html = res.text().await.unwrap();
    assert!(html.contains("Failed to fetch players"));
    assert!(html.contains("No players yet."));
    Ok(())
}

#[tokio::test]
async fn test_unknown_notice_code_still_renders_roster() -> Result<()> {
    let app = setup_web_app().await?;

    let res = app.client.get(app.url("/?notice=bogus")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let html = res.text().await.unwrap();
    assert!(html.contains("No players yet."));
    assert!(!html.contains("class=\"notice"));
    Ok(())
}
