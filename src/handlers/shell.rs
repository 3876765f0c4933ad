use axum::response::Html;

const TITLE: &str = "Workout Tracker";

fn header() -> String {
    format!(
        "<header class=\"site-header\">\n  <h1>{}</h1>\n</header>",
        TITLE
    )
}

fn content() -> &'static str {
    "<main>\n  <p>Track your workouts, exercises and sets.</p>\n</main>"
}

fn footer() -> String {
    format!(
        "<footer class=\"site-footer\">\n  <small>{} v{}</small>\n</footer>",
        TITLE,
        env!("CARGO_PKG_VERSION")
    )
}

/// Static page: header, one line of content, footer
pub fn render_page() -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>{}</title>\n</head>\n<body>\n{}\n{}\n{}\n</body>\n</html>\n",
        TITLE,
        header(),
        content(),
        footer()
    )
}

/// GET /app - front-end shell
pub async fn app_shell() -> Html<String> {
    Html(render_page())
}
