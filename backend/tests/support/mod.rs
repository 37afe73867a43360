//! Shared helpers for integration tests: a local stand-in for the identity
//! platform admin API.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};

/// A request observed by [`FakeAdminApi`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub apikey: Option<String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

async fn record(req: HttpRequest, state: web::Data<FakeState>) -> HttpResponse {
    let recorded = RecordedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_owned(),
        apikey: header(&req, "apikey"),
        authorization: header(&req, "authorization"),
    };
    state
        .requests
        .lock()
        .expect("request log poisoned")
        .push(recorded);
    HttpResponse::build(state.status)
        .content_type("application/json")
        .body(state.body)
}

/// Admin API fake answering every request with a fixed status and body.
pub struct FakeAdminApi {
    addr: SocketAddr,
    handle: ServerHandle,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeAdminApi {
    /// Bind to an ephemeral local port and start serving.
    pub fn start(status: StatusCode, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(FakeState {
            status,
            body,
            requests: requests.clone(),
        });
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(record))
        })
        .disable_signals()
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake admin API");
        let addr = *server.addrs().first().expect("bound address");
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            addr,
            handle,
            requests,
        }
    }

    /// Base URL to configure as `SUPABASE_URL`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Stop the listener.
    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
