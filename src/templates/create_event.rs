//! Event creation form page

use crate::utils::helpers::escape_html;

use super::layout;

/// Render the creation form, optionally with an error from a previous submit
pub fn render_create_event(error: Option<&str>) -> String {
    let error_html = error
        .map(|e| format!("<p class=\"error\">{}</p>\n", escape_html(e)))
        .unwrap_or_default();

    let content = format!(
        r#"{error_html}<form method="post" action="/create_event">
<label>Name <input type="text" name="name" required></label>
<label>Description <textarea name="description"></textarea></label>
<button type="submit">Create</button>
</form>
"#
    );

    layout("Create event", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_posts_back() {
        let page = render_create_event(None);
        assert!(page.contains(r#"action="/create_event""#));
        assert!(!page.contains("class=\"error\""));
    }

    #[test]
    fn test_renders_error() {
        let page = render_create_event(Some("Event name is required"));
        assert!(page.contains("<p class=\"error\">Event name is required</p>"));
    }
}
