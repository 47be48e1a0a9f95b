//! Shared utilities for integration testing.

use alloy::primitives::{address, Address, U256};
use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use circulating_supply::blockchain::TokenClient;
use circulating_supply::config::{Settings, LOCKED_ADDRESSES};
use circulating_supply::{HttpServer, Shutdown, SupplyCalculator};

// ERC-20 function selectors.
const TOTAL_SUPPLY: [u8; 4] = [0x18, 0x16, 0x0d, 0xdd];
const BALANCE_OF: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

pub const TOKEN: Address = address!("4242424242424242424242424242424242424242");

/// Scripted chain state. `None` makes the corresponding call fail.
#[derive(Default)]
struct Script {
    total_supply: Option<U256>,
    balances: HashMap<Address, Option<U256>>,
    delay: Option<Duration>,
}

/// Minimal JSON-RPC node answering `eth_chainId` and ERC-20 `eth_call`s.
#[derive(Clone, Default)]
pub struct MockNode {
    script: Arc<Mutex<Script>>,
}

#[allow(dead_code)]
impl MockNode {
    pub fn set_total_supply(&self, value: Option<u64>) {
        self.script.lock().unwrap().total_supply = value.map(U256::from);
    }

    pub fn set_balance(&self, owner: Address, value: Option<u64>) {
        self.script
            .lock()
            .unwrap()
            .balances
            .insert(owner, value.map(U256::from));
    }

    pub fn set_delay(&self, delay: Duration) {
        self.script.lock().unwrap().delay = Some(delay);
    }

    /// Serve on an ephemeral port; returns the endpoint prefix.
    pub async fn start(&self) -> String {
        let app = Router::new()
            .route("/", post(rpc))
            .route("/{*key}", post(rpc))
            .with_state(self.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}/", addr)
    }

    fn answer(&self, method: &str, params: &Value) -> Result<Value, String> {
        let script = self.script.lock().unwrap();
        match method {
            "eth_chainId" => Ok(json!("0x1")),
            "eth_call" => {
                let tx = &params[0];
                let input = tx
                    .get("input")
                    .or_else(|| tx.get("data"))
                    .and_then(Value::as_str)
                    .ok_or("missing call data")?;
                let data = alloy::hex::decode(input.trim_start_matches("0x"))
                    .map_err(|e| e.to_string())?;

                let value = match data.get(..4) {
                    Some(sel) if sel == TOTAL_SUPPLY => script.total_supply,
                    Some(sel) if sel == BALANCE_OF && data.len() >= 36 => {
                        let owner = Address::from_slice(&data[16..36]);
                        script.balances.get(&owner).copied().flatten()
                    }
                    _ => return Err("execution reverted".to_string()),
                };

                value
                    .map(|v| json!(alloy::hex::encode_prefixed(v.to_be_bytes::<32>())))
                    .ok_or_else(|| "upstream unavailable".to_string())
            }
            other => Err(format!("method {} not supported", other)),
        }
    }
}

async fn rpc(State(node): State<MockNode>, Json(request): Json<Value>) -> Json<Value> {
    let delay = node.script.lock().unwrap().delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default();
    let body = match node.answer(method, &request["params"]) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err(message) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32000, "message": message }
        }),
    };
    Json(body)
}

/// A running service wired exactly as in production, against `rpc_url`.
pub struct TestService {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

#[allow(dead_code)]
impl TestService {
    pub async fn start(rpc_url: &str, rpc_timeout: Duration) -> Self {
        let settings = Settings {
            port: 0,
            token_address: TOKEN,
            rpc_url: format!("{}test-key", rpc_url).parse().unwrap(),
            rpc_timeout,
            metrics_address: None,
        };

        let calculator = Arc::new(SupplyCalculator::new(
            TokenClient::new(&settings),
            LOCKED_ADDRESSES,
        ));
        let server = HttpServer::new(calculator);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Shutdown::new();
        let server_shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });

        Self { addr, shutdown }
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub async fn get(&self) -> (u16, String, reqwest::header::HeaderMap) {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let res = client.get(self.url()).send().await.expect("service unreachable");
        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = res.text().await.unwrap();
        (status, body, headers)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
