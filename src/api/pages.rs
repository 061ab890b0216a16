//! Server-rendered pages
//!
//! The listing page is rendered per request from the filtered rows; the add
//! form is a static document embedded at compile time.

use axum::response::Html;

use crate::api::catalog::ListQuery;
use crate::db::Song;

const ADD_HTML: &str = include_str!("../ui/add.html");

/// GET /add
///
/// Serves the static add-song form
pub async fn add_form() -> Html<&'static str> {
    Html(ADD_HTML)
}

/// Render the listing page: filter form, song table with per-row delete
/// forms, and the version footer
pub fn render_index(
    songs: &[Song],
    query: &ListQuery,
    genres: &[String],
    tunings: &[String],
    version: &str,
) -> String {
    let mut page = String::with_capacity(4096);

    page.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Chordbook</title>\n</head>\n<body>\n<h1>Chordbook</h1>\n\
         <p><a href=\"/add\">Add a song</a></p>\n",
    );

    // Filter form; selected values survive the round trip
    page.push_str("<form method=\"get\" action=\"/\">\n");
    page.push_str(&format!(
        "<input type=\"text\" name=\"search\" value=\"{}\" \
         placeholder=\"Search name, artist, or genre\">\n",
        escape(&query.search)
    ));
    page.push_str(&render_select("genre", "All genres", genres, &query.genre));
    page.push_str(&render_select("tuning", "All tunings", tunings, &query.tuning));
    page.push_str("<button type=\"submit\">Filter</button>\n</form>\n");

    page.push_str(
        "<table>\n<tr><th>Name</th><th>Artist</th><th>Genre</th>\
         <th>Tuning</th><th>Link</th><th>Note</th><th></th></tr>\n",
    );
    for song in songs {
        page.push_str(&render_row(song));
    }
    page.push_str("</table>\n");

    page.push_str(&format!(
        "<footer>chordbook v{}</footer>\n</body>\n</html>\n",
        escape(version)
    ));

    page
}

fn render_select(name: &str, all_label: &str, options: &[String], selected: &str) -> String {
    let mut select = format!(
        "<select name=\"{}\">\n<option value=\"\">{}</option>\n",
        name, all_label
    );
    for option in options {
        let marker = if option == selected { " selected" } else { "" };
        select.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape(option),
            marker
        ));
    }
    select.push_str("</select>\n");
    select
}

fn render_row(song: &Song) -> String {
    let link = match song.link.as_deref() {
        Some(url) if !url.is_empty() => {
            format!("<a href=\"{0}\">{0}</a>", escape(url))
        }
        _ => String::new(),
    };

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td><form method=\"post\" action=\"/delete/{}\">\
         <input type=\"password\" name=\"password\" placeholder=\"password\" required>\
         <button type=\"submit\">Delete</button></form></td></tr>\n",
        escape(&song.name),
        escape(song.artist.as_deref().unwrap_or("")),
        escape(song.genre.as_deref().unwrap_or("")),
        escape(song.tuning.as_deref().unwrap_or("")),
        link,
        escape(song.note.as_deref().unwrap_or("")),
        song.id,
    )
}

/// Escape text for safe use in HTML body and attribute positions
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
