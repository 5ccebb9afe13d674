use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

use server::startup;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    let url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL missing; skip e2e tests. Provide .env or env var.");
            return Err(anyhow::anyhow!("missing DATABASE_URL"));
        }
    };

    let mut cfg = AppConfig::default();
    cfg.database.url = url;
    cfg.database.min_connections = 1;
    cfg.database.max_connections = 2;
    cfg.database.validate()?;

    let state = startup::build_state(&cfg).await?;
    let app = startup::build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = startup::serve(listener, app, std::future::pending()).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

async fn app_or_skip() -> Option<TestApp> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return None; }
    start_server().await.ok()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let Some(app) = app_or_skip().await else { return Ok(()) };
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_contact_lifecycle() -> anyhow::Result<()> {
    let Some(app) = app_or_skip().await else { return Ok(()) };
    let c = reqwest::Client::new();
    let email = format!("john_{}@example.com", Uuid::new_v4().simple());

    // Create
    let res = c.post(format!("{}/api/v1/contacts", app.base_url))
        .json(&json!({"name": "John", "lastName": "Doe", "email": email, "birthday": "1990-05-17"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert!(Uuid::parse_str(&id).is_ok());
    assert_eq!(created["createdAt"], created["updatedAt"]);
    let contact_url = format!("{}/api/v1/contacts/{}", app.base_url, id);

    // Read back
    let res = c.get(&contact_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched, created);

    // Invalid update leaves the record untouched
    let res = c.put(&contact_url)
        .json(&json!({"name": "John", "lastName": "Doe", "phone": "abc"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["fields"]["phone"].is_array());

    // Full replacement
    let res = c.put(&contact_url)
        .json(&json!({"name": "Johnny", "lastName": "Doe", "phone": "+1 555 123 4567"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["email"].is_null());
    assert!(updated["birthday"].is_null());

    // Delete
    let res = c.delete(&contact_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(&contact_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.delete(&contact_url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_list_page_shape() -> anyhow::Result<()> {
    let Some(app) = app_or_skip().await else { return Ok(()) };
    let res = reqwest::get(format!("{}/api/v1/contacts?page=0&size=5", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let page = res.json::<serde_json::Value>().await?;
    assert!(page["content"].as_array().map(|c| c.len() <= 5).unwrap_or(false));
    assert_eq!(page["size"], 5);
    assert_eq!(page["number"], 0);
    assert!(page["totalElements"].is_u64());

    let res = reqwest::get(format!("{}/api/v1/contacts?size=1000", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
