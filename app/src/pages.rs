//! Static HTML pages compiled into the binary.

use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../assets/index.html");
const ADMIN_PAGE: &str = include_str!("../assets/admin.html");

/// `GET /`: invitation, countdown and RSVP form.
#[allow(clippy::unused_async)]
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// `GET /admin`: response table, totals and CSV export link.
#[allow(clippy::unused_async)]
pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}
