use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Activity {
    id: i64,
    name: String,
    created_at: String,
}

#[derive(Debug, Deserialize)]
struct Lap {
    id: i64,
    activity_id: i64,
    recorded_at: String,
}

#[derive(Debug, Deserialize)]
struct ActivitySummary {
    id: i64,
    name: String,
    #[allow(dead_code)]
    created_at: String,
    lap_count: u64,
}

#[derive(Debug, Deserialize)]
struct LapHistory {
    activity: Activity,
    laps: Vec<Lap>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "round_counter_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/activities")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_round_counter"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn create_activity(client: &Client, base_url: &str, name: &str) -> Activity {
    let response = client
        .post(format!("{base_url}/api/activities"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_activity_lap_lifecycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let activity = create_activity(&client, base, "Running").await;
    assert_eq!(activity.name, "Running");
    assert!(!activity.created_at.is_empty());

    // exact duplicate conflicts
    let response = client
        .post(format!("{base}/api/activities"))
        .json(&serde_json::json!({ "name": "Running" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Activity already exists");

    // two laps with increasing ids
    let mut lap_ids = Vec::new();
    for _ in 0..2 {
        let response = client
            .post(format!("{base}/api/activities/{}/laps", activity.id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
        let lap: Lap = response.json().await.unwrap();
        assert_eq!(lap.activity_id, activity.id);
        assert!(!lap.recorded_at.is_empty());
        lap_ids.push(lap.id);
    }
    assert!(lap_ids[0] < lap_ids[1]);

    // history is newest first
    let history: LapHistory = client
        .get(format!("{base}/api/activities/{}/laps", activity.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.activity.id, activity.id);
    assert_eq!(history.laps.len(), 2);
    assert_eq!(history.laps[0].id, lap_ids[1]);
    assert_eq!(history.laps[1].id, lap_ids[0]);

    // delete the first lap
    let response = client
        .delete(format!(
            "{base}/api/activities/{}/laps/{}",
            activity.id, lap_ids[0]
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let history: LapHistory = client
        .get(format!("{base}/api/activities/{}/laps", activity.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.laps.len(), 1);
    assert_eq!(history.laps[0].id, lap_ids[1]);

    // delete the activity, laps go with it
    let response = client
        .delete(format!("{base}/api/activities/{}", activity.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .get(format!("{base}/api/activities/{}/laps", activity.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn http_empty_name_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for payload in [
        serde_json::json!({ "name": "" }),
        serde_json::json!({ "name": "   " }),
        serde_json::json!({}),
    ] {
        let response = client
            .post(format!("{}/api/activities", server.base_url))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, "Activity name is required");
    }
}

#[tokio::test]
async fn http_non_integer_ids_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let response = client
        .delete(format!("{base}/api/activities/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Invalid id");

    let response = client
        .post(format!("{base}/api/activities/abc/laps"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .get(format!("{base}/api/activities/abc/laps"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .delete(format!("{base}/api/activities/1/laps/xyz"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Invalid lapId");
}

#[tokio::test]
async fn http_missing_activity_delete_is_404_each_time() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for _ in 0..2 {
        let response = client
            .delete(format!("{}/api/activities/999999", server.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404);
        let body: ErrorBody = response.json().await.unwrap();
        assert_eq!(body.error, "Activity not found");
    }
}

#[tokio::test]
async fn http_list_reports_live_lap_counts_newest_first() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let older = create_activity(&client, base, "Rowing").await;
    let newer = create_activity(&client, base, "Climbing").await;

    for _ in 0..3 {
        let response = client
            .post(format!("{base}/api/activities/{}/laps", older.id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
    }

    let list: Vec<ActivitySummary> = client
        .get(format!("{base}/api/activities"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let older_pos = list.iter().position(|a| a.id == older.id).unwrap();
    let newer_pos = list.iter().position(|a| a.id == newer.id).unwrap();
    assert!(newer_pos < older_pos, "newer activity should list first");
    assert_eq!(list[older_pos].lap_count, 3);
    assert_eq!(list[newer_pos].lap_count, 0);
    assert_eq!(list[older_pos].name, "Rowing");
}

#[tokio::test]
async fn http_lap_delete_scoped_to_owner() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let base = &server.base_url;

    let owner = create_activity(&client, base, "Sprints").await;
    let other = create_activity(&client, base, "Intervals").await;

    let response = client
        .post(format!("{base}/api/activities/{}/laps", owner.id))
        .send()
        .await
        .unwrap();
    let lap: Lap = response.json().await.unwrap();

    // existing lap id, wrong owner
    let response = client
        .delete(format!("{base}/api/activities/{}/laps/{}", other.id, lap.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "Lap not found");

    let history: LapHistory = client
        .get(format!("{base}/api/activities/{}/laps", owner.id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.laps.len(), 1);
}

#[tokio::test]
async fn http_index_serves_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("RoundCounter"));
}
