//! 테스트용 가짜 백엔드 (axum, 메모리 상태)
#![allow(dead_code)]

// region:    --- Imports
use axum::extract::{Multipart, Path, Request, State};
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use campus_bazaar::api::ApiClient;
use campus_bazaar::config::ClientConfig;
use campus_bazaar::session::{MemorySessionStore, SessionStore};
use campus_bazaar::AppContext;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

// endregion: --- Imports

pub const VALID_OTP: &str = "123456";
pub const ADMIN_TOKEN: &str = "admin-token";

// region:    --- State
#[derive(Debug, Clone)]
pub struct MockUser {
    pub password: String,
    pub profile: Value,
}

#[derive(Debug, Clone)]
pub struct MockProduct {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub asking_price: f64,
    pub category: String,
    pub status: String,
    pub seller: String,
    pub image: String,
    pub deadline: Option<String>,
}

impl MockProduct {
    fn to_json(&self) -> Value {
        json!({
            "product_id": self.id,
            "name": self.name,
            "description": self.description,
            "asking_price": self.asking_price,
            "category": self.category,
            "status": self.status,
            "image": self.image,
            "deadline": self.deadline,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MockBid {
    pub id: i64,
    pub product_id: i64,
    pub amount: f64,
    pub bidder: String,
}

#[derive(Debug, Clone)]
pub struct MockQuery {
    pub id: i64,
    pub product_id: i64,
    pub text: String,
    pub author: String,
    pub reply: Option<String>,
}

impl MockQuery {
    fn to_json(&self, users: &HashMap<String, MockUser>) -> Value {
        let name = users
            .get(&self.author)
            .and_then(|u| u.profile["name"].as_str())
            .unwrap_or("Anonymous");
        json!({
            "query_id": self.id,
            "query": self.text,
            "customer_name": name,
            "reply": self.reply,
        })
    }
}

#[derive(Debug, Default)]
pub struct MockState {
    pub users: HashMap<String, MockUser>,
    pub otp_requests: Vec<String>,
    pub products: Vec<MockProduct>,
    pub bids: Vec<MockBid>,
    pub queries: Vec<MockQuery>,
    pub uploads: HashMap<i64, Vec<String>>,
    pub requests: Vec<String>,
    pub next_id: i64,
    pub fail_request_otp: bool,
    pub fail_login: bool,
    pub fail_uploads: bool,
    pub profile_unauthorized: bool,
    pub listing_delay: Option<Duration>,
}

impl MockState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn highest_bid(&self, product_id: i64) -> Option<f64> {
        self.bids
            .iter()
            .filter(|b| b.product_id == product_id)
            .map(|b| b.amount)
            .fold(None, |acc, a| Some(acc.map_or(a, |m: f64| m.max(a))))
    }
}

pub type Shared = Arc<Mutex<MockState>>;
type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn fail(status: StatusCode, msg: &str) -> Reply {
    (status, Json(json!({ "error": msg })))
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

/// 토큰 형식: token-<email>
fn user_email(state: &MockState, headers: &HeaderMap) -> Option<String> {
    let email = bearer(headers)?.strip_prefix("token-")?.to_string();
    state.users.contains_key(&email).then_some(email)
}

// endregion: --- State

// region:    --- Mock Backend
pub struct MockBackend {
    pub url: String,
    pub state: Shared,
}

/// 트레이싱 초기화 (테스트 바이너리당 한 번만 적용됨)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .try_init();
}

impl MockBackend {
    pub async fn start() -> Self {
        init_tracing();
        let state: Shared = Arc::new(Mutex::new(MockState::default()));
        let app = router(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { url, state }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::with_api_url(&self.url)
    }

    /// 메모리 세션 저장소를 쓰는 컨텍스트
    pub fn ctx(&self) -> AppContext {
        self.ctx_with(self.config())
    }

    pub fn ctx_with(&self, config: ClientConfig) -> AppContext {
        let api = Arc::new(ApiClient::new(&config).unwrap());
        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        AppContext::new(api, session)
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn requests(&self) -> Vec<String> {
        self.with_state(|s| s.requests.clone())
    }

    pub fn request_count(&self, prefix: &str) -> usize {
        self.requests().iter().filter(|r| r.starts_with(prefix)).count()
    }

    pub fn seed_user(&self, email: &str, password: &str, name: &str) {
        self.with_state(|s| {
            s.users.insert(
                email.to_string(),
                MockUser {
                    password: password.to_string(),
                    profile: json!({
                        "name": name,
                        "roll_no": format!("IIT{}", name.len()),
                        "phone_no": "9876543210",
                        "email": email,
                        "hostel": "BH-1",
                    }),
                },
            );
        });
    }

    /// 기숙사를 자유 입력으로 가입한 기존 계정
    pub fn set_hostel(&self, email: &str, hostel: &str) {
        self.with_state(|s| {
            if let Some(user) = s.users.get_mut(email) {
                user.profile["hostel"] = hostel.into();
            }
        });
    }

    pub fn seed_product(
        &self,
        name: &str,
        category: &str,
        price: f64,
        status: &str,
        seller: &str,
    ) -> i64 {
        self.with_state(|s| {
            let id = s.next_id();
            s.products.push(MockProduct {
                id,
                name: name.to_string(),
                description: format!("{} in good condition", name),
                asking_price: price,
                category: category.to_string(),
                status: status.to_string(),
                seller: seller.to_string(),
                image: String::new(),
                deadline: None,
            });
            id
        })
    }

    pub fn seed_bid(&self, product_id: i64, amount: f64, bidder: &str) {
        self.with_state(|s| {
            let id = s.next_id();
            s.bids.push(MockBid {
                id,
                product_id,
                amount,
                bidder: bidder.to_string(),
            });
        });
    }

    pub fn seed_query(&self, product_id: i64, text: &str, author: &str) -> i64 {
        self.with_state(|s| {
            let id = s.next_id();
            s.queries.push(MockQuery {
                id,
                product_id,
                text: text.to_string(),
                author: author.to_string(),
                reply: None,
            });
            id
        })
    }

    pub fn product_status(&self, product_id: i64) -> Option<String> {
        self.with_state(|s| {
            s.products
                .iter()
                .find(|p| p.id == product_id)
                .map(|p| p.status.clone())
        })
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/request-otp", post(request_otp))
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/auth/profile", get(profile))
        .route("/api/auth/edit-profile", put(edit_profile))
        .route("/api/seller/active-listings", get(active_listings))
        .route("/api/seller/my-listings", get(my_listings))
        .route("/api/seller/add-product", post(add_product))
        .route("/api/seller/upload-images/:id", post(upload_images))
        .route("/api/seller/get-product-by-id/:id", get(product_by_id))
        .route("/api/seller/edit-product/:id", put(edit_product))
        .route("/api/seller/delete-product/:id", delete(delete_product))
        .route("/api/seller/buyer-info/:id", get(buyer_info))
        .route("/api/bid/place", post(place_bid))
        .route("/api/bid/highest/:id", get(highest_bid))
        .route("/api/bid/product/:id", get(product_bids))
        .route("/api/bid/my-bids", get(my_bids))
        .route("/api/query/post", post(post_query))
        .route("/api/query/:id", get(product_queries))
        .route("/api/query/edit/:id", put(edit_query))
        .route("/api/query/delete/:id", delete(delete_query))
        .route("/api/query/respond/:id", post(respond_query))
        .route("/api/admin/login", post(admin_login))
        .route(
            "/api/admin/approval-pending-products",
            get(pending_products),
        )
        .route("/api/admin/approve-product", post(approve_product))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            record_request,
        ))
        .with_state(state)
}

async fn record_request(State(state): State<Shared>, req: Request, next: Next) -> Response {
    state
        .lock()
        .unwrap()
        .requests
        .push(format!("{} {}", req.method(), req.uri().path()));
    next.run(req).await
}

// endregion: --- Mock Backend

// region:    --- Auth Handlers
async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let s = state.lock().unwrap();
    if s.fail_login {
        return fail(StatusCode::SERVICE_UNAVAILABLE, "Login service unavailable");
    }
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    match s.users.get(email) {
        Some(user) if user.password == password => ok(json!({ "token": format!("token-{}", email) })),
        _ => fail(StatusCode::UNAUTHORIZED, "Invalid email or password"),
    }
}

async fn request_otp(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut s = state.lock().unwrap();
    if s.fail_request_otp {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "Mail server unavailable");
    }
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if s.users.contains_key(&email) {
        return fail(StatusCode::BAD_REQUEST, "User already exists");
    }
    s.otp_requests.push(email);
    ok(json!({ "message": "OTP sent" }))
}

async fn verify_otp(State(state): State<Shared>, Json(body): Json<Value>) -> Reply {
    let mut s = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if !s.otp_requests.contains(&email) {
        return fail(StatusCode::BAD_REQUEST, "No OTP requested for this email");
    }
    if body["otp"].as_str() != Some(VALID_OTP) {
        return fail(StatusCode::BAD_REQUEST, "Invalid OTP");
    }
    let profile = json!({
        "name": body["name"],
        "roll_no": body["roll_no"],
        "phone_no": body["phone_no"],
        "email": email,
        "hostel": body["hostel"],
    });
    let password = body["password"].as_str().unwrap_or_default().to_string();
    s.users.insert(email, MockUser { password, profile });
    ok(json!({ "message": "Signup successful" }))
}

async fn profile(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let s = state.lock().unwrap();
    if s.profile_unauthorized {
        return fail(StatusCode::UNAUTHORIZED, "Token expired");
    }
    match user_email(&s, &headers) {
        Some(email) => ok(json!({ "user": s.users[&email].profile })),
        None => fail(StatusCode::UNAUTHORIZED, "Unauthorized"),
    }
}

async fn edit_profile(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let user = s.users.get_mut(&email).unwrap();
    user.profile = body;
    ok(json!({ "user": user.profile }))
}

// endregion: --- Auth Handlers

// region:    --- Seller Handlers
async fn active_listings(State(state): State<Shared>) -> Reply {
    let delay = state.lock().unwrap().listing_delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    let s = state.lock().unwrap();
    let products: Vec<Value> = s
        .products
        .iter()
        .filter(|p| p.status == "active")
        .map(MockProduct::to_json)
        .collect();
    ok(json!({ "products": products }))
}

async fn my_listings(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let products: Vec<Value> = s
        .products
        .iter()
        .filter(|p| p.seller == email)
        .map(MockProduct::to_json)
        .collect();
    ok(json!({ "products": products }))
}

async fn add_product(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let id = s.next_id();
    let product = MockProduct {
        id,
        name: body["name"].as_str().unwrap_or_default().to_string(),
        description: body["description"].as_str().unwrap_or_default().to_string(),
        asking_price: body["asking_price"].as_f64().unwrap_or_default(),
        category: body["category"].as_str().unwrap_or_default().to_string(),
        status: "approval-pending".to_string(),
        seller: email,
        image: String::new(),
        // 받은 형식 그대로 돌려준다 ("2030-01-31")
        deadline: body["deadline"].as_str().map(str::to_string),
    };
    let body = json!({ "product": product.to_json() });
    s.products.push(product);
    ok(body)
}

async fn upload_images(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Reply {
    let mut names = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("images") {
            names.push(field.file_name().unwrap_or_default().to_string());
        }
    }
    let mut s = state.lock().unwrap();
    if s.fail_uploads {
        return fail(StatusCode::INTERNAL_SERVER_ERROR, "Storage unavailable");
    }
    let count = names.len();
    s.uploads.insert(id, names);
    ok(json!({ "message": "Images uploaded", "count": count }))
}

async fn product_by_id(State(state): State<Shared>, Path(id): Path<i64>) -> Reply {
    let s = state.lock().unwrap();
    match s.products.iter().find(|p| p.id == id) {
        Some(p) => ok(json!({ "product": p.to_json() })),
        None => fail(StatusCode::NOT_FOUND, "Product not found"),
    }
}

async fn edit_product(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let Some(p) = s.products.iter_mut().find(|p| p.id == id) else {
        return fail(StatusCode::NOT_FOUND, "Product not found");
    };
    if p.seller != email {
        return fail(StatusCode::FORBIDDEN, "Not your product");
    }
    p.name = body["name"].as_str().unwrap_or_default().to_string();
    p.description = body["description"].as_str().unwrap_or_default().to_string();
    p.asking_price = body["asking_price"].as_f64().unwrap_or_default();
    p.image = body["image"].as_str().unwrap_or_default().to_string();
    ok(json!({ "product": p.to_json() }))
}

async fn delete_product(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    let mut s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let pos = s.products.iter().position(|p| p.id == id);
    match pos {
        Some(i) if s.products[i].seller == email => {
            s.products.remove(i);
            ok(json!({ "message": "Product deleted" }))
        }
        Some(_) => fail(StatusCode::FORBIDDEN, "Not your product"),
        None => fail(StatusCode::NOT_FOUND, "Product not found"),
    }
}

async fn buyer_info(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    let s = state.lock().unwrap();
    if user_email(&s, &headers).is_none() {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    let Some(p) = s.products.iter().find(|p| p.id == id) else {
        return fail(StatusCode::NOT_FOUND, "Product not found");
    };
    if p.status != "sold" {
        return fail(StatusCode::BAD_REQUEST, "Product not sold yet");
    }
    let top = s
        .bids
        .iter()
        .filter(|b| b.product_id == id)
        .max_by(|a, b| a.amount.total_cmp(&b.amount));
    match top.and_then(|b| s.users.get(&b.bidder).map(|u| (b, u))) {
        Some((bid, user)) => ok(json!({
            "buyer": {
                "name": user.profile["name"],
                "roll_no": user.profile["roll_no"],
                "phone_no": user.profile["phone_no"],
                "email": user.profile["email"],
                "hostel": user.profile["hostel"],
                "amount": bid.amount,
            }
        })),
        None => fail(StatusCode::NOT_FOUND, "No buyer"),
    }
}

// endregion: --- Seller Handlers

// region:    --- Bid Handlers
async fn place_bid(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let product_id = body["product_id"].as_i64().unwrap_or_default();
    let amount = body["amount"].as_f64().unwrap_or_default();
    if s.highest_bid(product_id).is_some_and(|h| amount <= h) {
        return fail(
            StatusCode::BAD_REQUEST,
            "Bid must be higher than the current highest bid",
        );
    }
    let id = s.next_id();
    s.bids.push(MockBid {
        id,
        product_id,
        amount,
        bidder: email,
    });
    ok(json!({ "message": "Bid placed", "bid_id": id }))
}

async fn highest_bid(State(state): State<Shared>, Path(id): Path<i64>) -> Reply {
    let s = state.lock().unwrap();
    ok(json!({ "highest_bid": s.highest_bid(id) }))
}

async fn product_bids(State(state): State<Shared>, Path(id): Path<i64>) -> Reply {
    let s = state.lock().unwrap();
    let bids: Vec<Value> = s
        .bids
        .iter()
        .filter(|b| b.product_id == id)
        .map(|b| {
            let user = s.users.get(&b.bidder);
            json!({
                "bid_id": b.id,
                "amount": b.amount,
                "bidder_name": user.map(|u| u.profile["name"].clone()),
                "roll_no": user.map(|u| u.profile["roll_no"].clone()),
            })
        })
        .collect();
    ok(json!({ "bids": bids }))
}

async fn my_bids(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    let s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let bids: Vec<Value> = s
        .bids
        .iter()
        .filter(|b| b.bidder == email)
        .filter_map(|b| {
            let p = s.products.iter().find(|p| p.id == b.product_id)?;
            let highest = s.highest_bid(b.product_id) == Some(b.amount);
            Some(json!({
                "bid_id": b.id,
                "product_id": p.id,
                "product_name": p.name,
                "amount": b.amount,
                "asking_price": p.asking_price,
                "deadline": p.deadline,
                "status": if highest { "highest" } else { "outbid" },
            }))
        })
        .collect();
    ok(json!({ "my_bids": bids }))
}

// endregion: --- Bid Handlers

// region:    --- Query Handlers
async fn product_queries(State(state): State<Shared>, Path(id): Path<i64>) -> Reply {
    let s = state.lock().unwrap();
    let queries: Vec<Value> = s
        .queries
        .iter()
        .filter(|q| q.product_id == id)
        .map(|q| q.to_json(&s.users))
        .collect();
    if queries.is_empty() {
        return fail(StatusCode::NOT_FOUND, "No queries found");
    }
    ok(json!({ "queries": queries }))
}

async fn post_query(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let id = s.next_id();
    let query = MockQuery {
        id,
        product_id: body["product_id"].as_i64().unwrap_or_default(),
        text: body["query"].as_str().unwrap_or_default().to_string(),
        author: email,
        reply: None,
    };
    let body = json!({ "query": query.to_json(&s.users) });
    s.queries.push(query);
    ok(body)
}

async fn edit_query(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut guard = state.lock().unwrap();
    let s = &mut *guard;
    let Some(email) = user_email(s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let Some(q) = s.queries.iter_mut().find(|q| q.id == id) else {
        return fail(StatusCode::NOT_FOUND, "Query not found");
    };
    if q.author != email {
        return fail(StatusCode::FORBIDDEN, "Not your query");
    }
    q.text = body["query"].as_str().unwrap_or_default().to_string();
    let q = q.clone();
    ok(json!({ "query": q.to_json(&s.users) }))
}

async fn delete_query(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    let mut s = state.lock().unwrap();
    let Some(email) = user_email(&s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let pos = s.queries.iter().position(|q| q.id == id);
    match pos {
        Some(i) if s.queries[i].author == email => {
            s.queries.remove(i);
            ok(json!({ "message": "Query deleted" }))
        }
        Some(_) => fail(StatusCode::FORBIDDEN, "Not your query"),
        None => fail(StatusCode::NOT_FOUND, "Query not found"),
    }
}

async fn respond_query(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut guard = state.lock().unwrap();
    let s = &mut *guard;
    let Some(email) = user_email(s, &headers) else {
        return fail(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let Some(q) = s.queries.iter_mut().find(|q| q.id == id) else {
        return fail(StatusCode::NOT_FOUND, "Query not found");
    };
    let seller = s
        .products
        .iter()
        .find(|p| p.id == q.product_id)
        .map(|p| p.seller.clone());
    if seller.as_deref() != Some(email.as_str()) {
        return fail(StatusCode::FORBIDDEN, "Only the seller can reply");
    }
    let reply = body["reply"].as_str().unwrap_or_default().to_string();
    q.reply = Some(reply.clone());
    ok(json!({ "query": { "query_id": id, "reply": reply } }))
}

// endregion: --- Query Handlers

// region:    --- Admin Handlers
async fn admin_login(Json(body): Json<Value>) -> Reply {
    if body["username"] == "admin" && body["password"] == "admin123" {
        ok(json!({ "token": ADMIN_TOKEN }))
    } else {
        fail(StatusCode::UNAUTHORIZED, "Invalid admin credentials")
    }
}

async fn pending_products(State(state): State<Shared>, headers: HeaderMap) -> Reply {
    if bearer(&headers).as_deref() != Some(ADMIN_TOKEN) {
        return fail(StatusCode::FORBIDDEN, "Admin access required");
    }
    let s = state.lock().unwrap();
    let products: Vec<Value> = s
        .products
        .iter()
        .filter(|p| p.status == "approval-pending")
        .map(MockProduct::to_json)
        .collect();
    ok(json!({ "products": products }))
}

async fn approve_product(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if bearer(&headers).as_deref() != Some(ADMIN_TOKEN) {
        return fail(StatusCode::FORBIDDEN, "Admin access required");
    }
    let mut s = state.lock().unwrap();
    let id = body["product_id"].as_i64().unwrap_or_default();
    let status = body["status"].as_str().unwrap_or_default().to_string();
    if status != "active" && status != "disapproved" {
        return fail(StatusCode::BAD_REQUEST, "Invalid status");
    }
    match s.products.iter_mut().find(|p| p.id == id) {
        Some(p) => {
            p.status = status;
            ok(json!({ "message": "Status updated" }))
        }
        None => fail(StatusCode::NOT_FOUND, "Product not found"),
    }
}

// endregion: --- Admin Handlers
