use axum::http::StatusCode;
use std::collections::HashSet;
use std::sync::Arc;

use crate::common::{TestApp, body_text, session_cookie};

const LOGINS: usize = 64;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_logins_and_reads() {
    let app = Arc::new(TestApp::new());
    let seed = app.login_admin().await;

    let mut logins = Vec::new();
    let mut reads = Vec::new();
    for _ in 0..LOGINS {
        let login_app = Arc::clone(&app);
        logins.push(tokio::spawn(async move {
            let response = login_app.login("admin", "admin").await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            session_cookie(&response).expect("session cookie issued")
        }));

        let read_app = Arc::clone(&app);
        let seed = seed.clone();
        reads.push(tokio::spawn(async move {
            let response = read_app.get("/", Some(&seed)).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert!(body_text(response).await.contains("admin"));

            let session = read_app.state.store.get(&seed).await.expect("seed session");
            assert_eq!(session.username(), "admin");
        }));
    }

    let mut issued = HashSet::new();
    for handle in logins {
        issued.insert(handle.await.unwrap());
    }
    for handle in reads {
        handle.await.unwrap();
    }

    assert_eq!(issued.len(), LOGINS);
    assert_eq!(app.state.store.len().await, LOGINS + 1);

    for session_id in &issued {
        let session = app.state.store.get(session_id).await.unwrap();
        assert_eq!(session.username(), "admin");
    }
}
