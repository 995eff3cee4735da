//! Server harness and shared world for the users behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The `WorldFixture` stops the server
//! even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{App, HttpServer, web};
use awc::Client;
use backend::Trace;
use backend::domain::{TRACE_ID_HEADER, UserService};
use backend::inbound::http::configure_users;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::in_memory::InMemoryUserRepository;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

pub(crate) struct UsersWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<UsersWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

async fn spawn_users_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    let http_data = web::Data::new(HttpState::from_service(service));
    let health_data = web::Data::new(HealthState::new());
    health_data.mark_ready();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_data.clone())
            .app_data(health_data.clone())
            .wrap(Trace)
            .configure(configure_users)
            .service(ready)
            .service(live)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let (base_url, server) = local
        .block_on(&runtime, spawn_users_server())
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(UsersWorld {
            runtime,
            local,
            base_url,
            server,
            last_status: None,
            last_body: None,
            last_trace_id: None,
        })),
    }
}

/// Send one request and record status, trace header and JSON body.
///
/// Empty bodies (204) are recorded as `None`.
pub(crate) fn perform_request(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) {
    let (status, trace_id, body) = {
        let ctx = world.borrow();
        let url = format!("{}{path}", ctx.base_url);
        ctx.local.block_on(&ctx.runtime, async move {
            let request = Client::default().request(method, url);
            let mut response = match payload {
                Some(payload) => request.send_json(&payload).await.expect("request sent"),
                None => request.send().await.expect("request sent"),
            };
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = response.body().await.expect("response body");
            let body = (!bytes.is_empty())
                .then(|| serde_json::from_slice::<Value>(&bytes).expect("json body"));
            (status, trace_id, body)
        })
    };

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_trace_id = trace_id;
    ctx.last_body = body;
}
