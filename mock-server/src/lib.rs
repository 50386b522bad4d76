//! In-memory stand-in for the agency content API.
//!
//! Serves the listing, single-post and contact endpoints under `/api` with
//! the same envelopes the real backend uses, from a seeded catalogue.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

const DEFAULT_PER_PAGE: u32 = 15;
const MAX_PER_PAGE: u32 = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub option: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub published_at: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub courses_count: u32,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub option: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trainer {
    pub id: i64,
    pub name: String,
    pub expertise: Option<String>,
    pub years_of_experience: Option<u32>,
    pub photo_path: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactMessage {
    pub source: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u32,
    pub from: Option<u32>,
    pub to: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

/// Everything the server knows about.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub blogs: Vec<Blog>,
    pub programs: Vec<Program>,
    pub galleries: Vec<GalleryItem>,
    pub trainers: Vec<Trainer>,
    pub contacts: Vec<ContactMessage>,
}

pub type Db = Arc<RwLock<Catalog>>;

pub fn app() -> Router {
    app_with(Catalog::seeded())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(RwLock::new(catalog));
    Router::new()
        .route("/api/blogs", get(list_blogs))
        .route("/api/blogs/{slug}", get(get_blog))
        .route("/api/programs", get(list_programs))
        .route("/api/galleries", get(list_galleries))
        .route("/api/trainers", get(list_trainers))
        .route("/api/contact-us", post(create_contact))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "content API mock listening");
    }
    axum::serve(listener, app()).await
}

/// Slice `items` into the requested page.
pub fn paginate<T: Clone>(items: &[T], params: &PageParams) -> Page<T> {
    let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let total = items.len() as u32;
    let last_page = total.div_ceil(per_page).max(1);
    let current_page = params.page.unwrap_or(1).clamp(1, last_page);

    let start = ((current_page - 1) * per_page).min(total);
    let end = (start + per_page).min(total);
    let data = items[start as usize..end as usize].to_vec();
    let (from, to) = if data.is_empty() {
        (None, None)
    } else {
        (Some(start + 1), Some(end))
    };

    Page {
        success: true,
        data,
        pagination: Pagination {
            current_page,
            last_page,
            per_page,
            total,
            from,
            to,
        },
    }
}

async fn list_blogs(State(db): State<Db>, Query(params): Query<PageParams>) -> Json<Page<Blog>> {
    Json(paginate(&db.read().await.blogs, &params))
}

async fn get_blog(State(db): State<Db>, Path(slug): Path<String>) -> (StatusCode, Json<Value>) {
    let catalog = db.read().await;
    match catalog.blogs.iter().find(|b| b.slug == slug) {
        Some(blog) => (StatusCode::OK, Json(json!({"success": true, "data": blog}))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Blog not found."})),
        ),
    }
}

async fn list_programs(State(db): State<Db>, Query(params): Query<PageParams>) -> Json<Page<Program>> {
    Json(paginate(&db.read().await.programs, &params))
}

async fn list_galleries(
    State(db): State<Db>,
    Query(params): Query<PageParams>,
) -> Json<Page<GalleryItem>> {
    Json(paginate(&db.read().await.galleries, &params))
}

async fn list_trainers(State(db): State<Db>, Query(params): Query<PageParams>) -> Json<Page<Trainer>> {
    Json(paginate(&db.read().await.trainers, &params))
}

async fn create_contact(
    State(db): State<Db>,
    Json(input): Json<ContactMessage>,
) -> (StatusCode, Json<Value>) {
    for (field, value) in [("name", &input.name), ("email", &input.email), ("message", &input.message)] {
        if value.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"success": false, "message": format!("The {field} field is required.")})),
            );
        }
    }

    debug!(source = ?input.source, "contact message stored");
    db.write().await.contacts.push(input);
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "<p>Thank you for reaching out! Our team will contact you soon.</p>"
        })),
    )
}

impl Catalog {
    /// A small catalogue covering null keys, repeated keys and mixed asset paths.
    pub fn seeded() -> Self {
        let blogs = vec![
            Blog {
                id: 1,
                title: "10 Digital Marketing Trends to Watch in 2025".into(),
                slug: "digital-marketing-trends-2025".into(),
                option: Some("career".into()),
                content: Some(
                    "<p>AI-powered personalization is changing how brands speak.</p><h2>Voice search</h2><p>Optimize for natural language.</p>"
                        .into(),
                ),
                image_url: Some("blogs/trends.jpg".into()),
                published_at: Some("2025-01-15T09:00:00.000000Z".into()),
                created_at: Some("2025-01-10T09:00:00.000000Z".into()),
            },
            Blog {
                id: 2,
                title: "Building Scalable Web Applications".into(),
                slug: "scalable-web-applications".into(),
                option: None,
                content: Some(format!("<p>{}</p>", "scale ".repeat(400))),
                image_url: Some("https://images.example.com/scale.png".into()),
                published_at: None,
                created_at: Some("2025-01-08T12:00:00.000000Z".into()),
            },
            Blog {
                id: 3,
                title: "Career Moves for Designers".into(),
                slug: "career-moves-for-designers".into(),
                option: Some("career".into()),
                content: None,
                image_url: None,
                published_at: Some("2024-12-15T10:00:00.000000Z".into()),
                created_at: None,
            },
            Blog {
                id: 4,
                title: "Growth Loops That Work".into(),
                slug: "growth-loops".into(),
                option: Some("growth_hacking".into()),
                content: Some("<p>Loops beat funnels.".into()),
                image_url: Some("/storage/blogs/loops.jpg".into()),
                published_at: Some("2024-11-02T10:00:00.000000Z".into()),
                created_at: None,
            },
        ];

        let programs = vec![
            Program {
                id: 1,
                name: "Digital Marketing Bootcamp".into(),
                description: Some("<p>Campaign planning. Paid social.\nAnalytics and reporting. Content calendars. Capstone.</p>".into()),
                category: Some("digital_marketing".into()),
                color: Some("#e11d48".into()),
                courses_count: 6,
                updated_at: Some("2025-01-02T00:00:00.000000Z".into()),
            },
            Program {
                id: 2,
                name: "Creative Foundations".into(),
                description: None,
                category: None,
                color: None,
                courses_count: 3,
                updated_at: None,
            },
            Program {
                id: 3,
                name: "Full-Stack Development".into(),
                description: Some("Frontend. Backend. Deployment.".into()),
                category: Some("it".into()),
                color: None,
                courses_count: 8,
                updated_at: None,
            },
        ];

        let galleries = vec![
            GalleryItem {
                id: 1,
                title: "E-commerce Campaign".into(),
                option: Some("digital_marketing".into()),
                description: Some("<p>Multi-channel campaign.</p>".into()),
                image_url: Some("gallery/campaign.jpg".into()),
                created_at: None,
            },
            GalleryItem {
                id: 2,
                title: "Studio Moments".into(),
                option: None,
                description: None,
                image_url: Some("gallery/studio.jpg".into()),
                created_at: None,
            },
            GalleryItem {
                id: 3,
                title: "Brand Identity Package".into(),
                option: Some("creative_design".into()),
                description: Some("Logo, palette and style guide".into()),
                image_url: None,
                created_at: None,
            },
        ];

        let trainers = vec![
            Trainer {
                id: 1,
                name: "Sam Rivera".into(),
                expertise: Some("branding".into()),
                years_of_experience: Some(9),
                photo_path: Some("trainers/sam.jpg".into()),
            },
            Trainer {
                id: 2,
                name: "Kai Morgan".into(),
                expertise: None,
                years_of_experience: None,
                photo_path: None,
            },
        ];

        Self {
            blogs,
            programs,
            galleries,
            trainers,
            contacts: Vec::new(),
        }
    }
}
