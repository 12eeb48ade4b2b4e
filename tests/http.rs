use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};
use marvin::api::compute::StartVirtualMachine;
use marvin::api::infra::ListZones;
use marvin::api::{execute, execute_with};
use marvin::client::{ClientError, HttpClient};
use marvin::config::{ConnectionConfig, Timeouts};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// A request received by the test server
#[derive(Debug, Clone)]
struct Received {
    method: Method,
    params: HashMap<String, String>,
}

impl Received {
    fn command(&self) -> &str {
        self.params.get("command").map(String::as_str).unwrap_or_default()
    }
}

type Responder = dyn Fn(&Received, usize) -> (StatusCode, Value) + Send + Sync;

#[derive(Clone)]
struct TestServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Received>>>,
}

impl TestServer {
    /// Starts a server answering every request with `responder`, which also
    /// gets how many requests of the same command came before.
    fn start<F>(responder: F) -> TestServer
    where
        F: Fn(&Received, usize) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let received: Arc<Mutex<Vec<Received>>> = Arc::default();
        let responder: Arc<Responder> = Arc::new(responder);

        let state = received.clone();
        let make_service = make_service_fn(move |_| {
            let state = state.clone();
            let responder = responder.clone();
            async move {
                Ok::<_, Infallible>(service_fn(move |req| {
                    handle(req, state.clone(), responder.clone())
                }))
            }
        });

        let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
        let addr = server.local_addr();
        tokio::spawn(server);
        TestServer { addr, received }
    }

    fn client(&self) -> HttpClient {
        let timeouts = Timeouts {
            request: Duration::from_secs(5),
            async_job: Duration::from_secs(5),
            async_poll_interval: Duration::from_millis(5),
            ..Default::default()
        };
        let config = ConnectionConfig::new(self.addr.ip().to_string(), self.addr.port())
            .with_timeouts(timeouts);
        HttpClient::new(config).unwrap()
    }

    fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle(
    req: Request<Body>,
    state: Arc<Mutex<Vec<Received>>>,
    responder: Arc<Responder>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let query = req.uri().query().unwrap_or_default().to_string();
    let body = hyper::body::to_bytes(req.into_body())
        .await
        .unwrap_or_default();
    let encoded = if method == Method::POST {
        body.to_vec()
    } else {
        query.into_bytes()
    };
    let params = url::form_urlencoded::parse(&encoded)
        .into_owned()
        .collect::<HashMap<_, _>>();
    let received = Received { method, params };

    let previous = {
        let mut state = state.lock().unwrap();
        let previous = state
            .iter()
            .filter(|r| r.command() == received.command())
            .count();
        state.push(received.clone());
        previous
    };

    let (status, payload) = responder(&received, previous);
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap())
}

fn envelope(command: &str, payload: Value) -> Value {
    let mut body = serde_json::Map::new();
    body.insert(format!("{}response", command.to_lowercase()), payload);
    Value::Object(body)
}

#[tokio::test]
async fn sync_command() {
    let server = TestServer::start(|req, _| {
        (
            StatusCode::OK,
            envelope(
                req.command(),
                json!({"count": 1, "zone": [{"id": "z1", "name": "Sandbox-simulator"}]}),
            ),
        )
    });

    let zones = execute(
        &server.client(),
        &ListZones {
            available: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].name.as_deref(), Some("Sandbox-simulator"));

    let received = server.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method, Method::GET);
    assert_eq!(received[0].command(), "listZones");
    assert_eq!(received[0].params.get("available").map(String::as_str), Some("true"));
    assert_eq!(received[0].params.get("response").map(String::as_str), Some("json"));
    assert_eq!(received[0].params.get("signature"), None);
}

#[tokio::test]
async fn empty_list() {
    let server = TestServer::start(|req, _| (StatusCode::OK, envelope(req.command(), json!({}))));

    let zones = execute(&server.client(), &ListZones::default()).await.unwrap();
    assert!(zones.is_empty());
}

#[tokio::test]
async fn async_job_is_polled() {
    let server = TestServer::start(|req, previous| match req.command() {
        "startVirtualMachine" => (
            StatusCode::OK,
            envelope(req.command(), json!({"id": "vm1", "jobid": "job1"})),
        ),
        "queryAsyncJobResult" if previous < 2 => (
            StatusCode::OK,
            envelope(req.command(), json!({"jobid": "job1", "jobstatus": 0})),
        ),
        _ => (
            StatusCode::OK,
            envelope(
                req.command(),
                json!({
                    "jobid": "job1",
                    "jobstatus": 1,
                    "jobresult": {"virtualmachine": {"id": "vm1", "state": "Running"}}
                }),
            ),
        ),
    });

    let vm = execute(
        &server.client(),
        &StartVirtualMachine {
            id: "vm1".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(vm.state.as_deref(), Some("Running"));

    let commands: Vec<String> = server
        .received()
        .iter()
        .map(|r| r.command().to_string())
        .collect();
    assert_eq!(
        commands,
        vec![
            "startVirtualMachine",
            "queryAsyncJobResult",
            "queryAsyncJobResult",
            "queryAsyncJobResult",
        ]
    );
    assert_eq!(
        server.received()[1].params.get("jobid").map(String::as_str),
        Some("job1")
    );
}

#[tokio::test]
async fn failed_job() {
    let server = TestServer::start(|req, _| match req.command() {
        "startVirtualMachine" => (
            StatusCode::OK,
            envelope(req.command(), json!({"jobid": "job1"})),
        ),
        _ => (
            StatusCode::OK,
            envelope(
                req.command(),
                json!({
                    "jobid": "job1",
                    "jobstatus": 2,
                    "jobresultcode": 530,
                    "jobresult": {"errorcode": 530, "errortext": "Insufficient capacity"}
                }),
            ),
        ),
    });

    let err = execute(
        &server.client(),
        &StartVirtualMachine {
            id: "vm1".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    match err {
        ClientError::Api {
            command,
            code,
            text,
        } => {
            assert_eq!(command, "startVirtualMachine");
            assert_eq!(code, 530);
            assert_eq!(text, "Insufficient capacity");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn api_error_with_http_status() {
    let server = TestServer::start(|req, _| {
        (
            StatusCode::from_u16(431).unwrap(),
            envelope(
                req.command(),
                json!({"errorcode": 431, "cserrorcode": 4350, "errortext": "Unable to find zone"}),
            ),
        )
    });

    let err = execute(&server.client(), &ListZones::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { code: 431, .. }));
}

#[tokio::test]
async fn http_error_without_api_error() {
    let server = TestServer::start(|_, _| (StatusCode::INTERNAL_SERVER_ERROR, json!("oops")));

    let err = execute(&server.client(), &ListZones::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 500, .. }));
}

#[tokio::test]
async fn post_sends_form_body() {
    let server = TestServer::start(|req, _| {
        (
            StatusCode::OK,
            envelope(req.command(), json!({"zone": [{"id": "z1"}]})),
        )
    });

    execute_with(
        &server.client(),
        &ListZones {
            name: Some("zone one".to_string()),
            ..Default::default()
        },
        Method::POST,
    )
    .await
    .unwrap();

    let received = server.received();
    assert_eq!(received[0].method, Method::POST);
    assert_eq!(received[0].command(), "listZones");
    assert_eq!(
        received[0].params.get("name").map(String::as_str),
        Some("zone one")
    );
}

#[tokio::test]
async fn signed_requests() {
    let server = TestServer::start(|req, _| {
        (
            StatusCode::OK,
            envelope(req.command(), json!({"zone": []})),
        )
    });
    let config = ConnectionConfig::new(server.addr.ip().to_string(), server.addr.port())
        .with_keys("key".to_string(), "secret".to_string());
    let client = HttpClient::new(config).unwrap();

    execute(&client, &ListZones::default()).await.unwrap();

    let received = server.received();
    assert_eq!(received[0].params.get("apiKey").map(String::as_str), Some("key"));
    assert!(received[0].params.contains_key("signature"));
}

#[tokio::test]
async fn stalled_body_times_out() {
    let make_service = make_service_fn(|_| async {
        Ok::<_, Infallible>(service_fn(|_req: Request<Body>| async {
            let (mut sender, body) = Body::channel();
            tokio::spawn(async move {
                let _ = sender
                    .send_data(hyper::body::Bytes::from_static(b"{\"listzonesresponse\":"))
                    .await;
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(sender);
            });
            Ok::<_, Infallible>(
                Response::builder()
                    .header("content-length", "1024")
                    .body(body)
                    .unwrap(),
            )
        }))
    });
    let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
    let addr = server.local_addr();
    tokio::spawn(server);

    let timeouts = Timeouts {
        request: Duration::from_millis(200),
        ..Default::default()
    };
    let config =
        ConnectionConfig::new(addr.ip().to_string(), addr.port()).with_timeouts(timeouts);
    let client = HttpClient::new(config).unwrap();

    let started = std::time::Instant::now();
    let err = execute(&client, &ListZones::default()).await.unwrap_err();
    assert!(started.elapsed() < Duration::from_secs(10));
    match err {
        ClientError::Request { command, reason } => {
            assert_eq!(command, "listZones");
            assert_eq!(reason, "request timed out");
        }
        other => panic!("unexpected error {:?}", other),
    }
}
