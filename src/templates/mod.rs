//! HTML templates
//!
//! Server-rendered pages. All user supplied text goes through `escape_html`.

pub mod create_event;
pub mod get_events;

pub use create_event::render_create_event;
pub use get_events::render_get_events;

use crate::utils::helpers::escape_html;

/// Wrap page content in the shared document layout
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Savoten</title>
</head>
<body>
<nav><a href="/events">Events</a> | <a href="/create_event">Create event</a></nav>
<main>
<h1>{title}</h1>
{content}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        content = content,
    )
}
