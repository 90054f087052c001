use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

#[derive(Clone, Default)]
struct MockState {
    records: Arc<RwLock<HashMap<String, (StatusCode, String)>>>,
    queries: Arc<RwLock<Vec<HashMap<String, String>>>>,
}

/// In-process stand-in for a `/resolve?name=..&type=TXT` endpoint.
pub struct MockResolveServer {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockResolveServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new()
            .route("/resolve", get(resolve))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/resolve", self.addr)
    }

    pub async fn set_record(&self, name: &str, body: &str) {
        self.set_response(name, StatusCode::OK, body).await;
    }

    pub async fn set_response(&self, name: &str, status: StatusCode, body: &str) {
        self.state
            .records
            .write()
            .await
            .insert(name.to_string(), (status, body.to_string()));
    }

    /// Query strings received so far, in arrival order.
    pub async fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.read().await.clone()
    }
}

impl Drop for MockResolveServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn resolve(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    state.queries.write().await.push(params.clone());

    let name = params.get("name").cloned().unwrap_or_default();
    state
        .records
        .read()
        .await
        .get(&name)
        .cloned()
        .unwrap_or((StatusCode::OK, String::new()))
}
