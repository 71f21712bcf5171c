//! Event list page

use crate::models::{Event, EventItem};
use crate::utils::helpers::{escape_html, format_period, truncate_text};

use super::layout;

const DESCRIPTION_PREVIEW: usize = 120;

/// Render the event list; each event is paired with its items
pub fn render_get_events(events: &[(Event, Vec<EventItem>)]) -> String {
    if events.is_empty() {
        return layout(
            "Events",
            r#"<p class="empty">No events yet. <a href="/create_event">Create one</a>.</p>"#,
        );
    }

    let mut content = String::from("<ul class=\"events\">\n");
    for (event, items) in events {
        content.push_str(&render_event(event, items));
    }
    content.push_str("</ul>\n");

    layout("Events", &content)
}

fn render_event(event: &Event, items: &[EventItem]) -> String {
    let description = event
        .description
        .as_deref()
        .map(|d| {
            format!(
                "<p>{}</p>",
                escape_html(&truncate_text(d, DESCRIPTION_PREVIEW))
            )
        })
        .unwrap_or_default();

    let items_html: String = items
        .iter()
        .map(|item| {
            format!(
                "<li>{} ({} candidates)</li>",
                escape_html(&item.name),
                item.candidates.len()
            )
        })
        .collect();

    format!(
        "<li id=\"event-{id}\"><strong>{name}</strong> <span>{period}</span>{description}<ul>{items_html}</ul></li>\n",
        id = event.id.unwrap_or_default(),
        name = escape_html(&event.name),
        period = escape_html(&format_period(event.start_at, event.end_at)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, User};

    #[test]
    fn test_empty_page() {
        let page = render_get_events(&[]);
        assert!(page.contains("No events yet."));
    }

    #[test]
    fn test_lists_events_with_items() {
        let mut event = Event::new("Team <dinner>");
        event.id = Some(7);
        let item = EventItem::new(
            "Friday",
            vec![Candidate::new(User::new("test_user", "test_user@test.com", 100))],
        )
        .with_event_id(7);

        let page = render_get_events(&[(event, vec![item])]);

        assert!(page.contains("id=\"event-7\""));
        assert!(page.contains("Team &lt;dinner&gt;"));
        assert!(page.contains("<li>Friday (1 candidates)</li>"));
        assert!(page.contains("unscheduled"));
    }
}
