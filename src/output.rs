// src/output.rs
// =============================================================================
// Printing results.
//
// The API responses are passed around as plain JSON values, so the table
// view picks out the fields it knows about (id, title, author.name, created)
// and shows a blank for anything missing instead of failing.
// =============================================================================

use anyhow::Result;
use serde_json::Value;

/// Prints a posts collection (`{"data": [...], "meta": {...}}`)
pub fn print_collection(body: &Value, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(body)?);
        return Ok(());
    }

    let posts = body
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    print!("{}", render_table(posts));

    if let Some(meta) = body.get("meta") {
        println!("{}", render_meta(meta));
    }
    Ok(())
}

/// Prints a single post (the `data` object)
pub fn print_post(post: &Value, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(post)?);
        return Ok(());
    }

    print!("{}", render_post(post));
    Ok(())
}

fn render_table(posts: &[Value]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<8} {:<50} {:<20} {:<25}\n", "ID", "TITLE", "AUTHOR", "CREATED"));
    out.push_str(&format!("{}\n", "=".repeat(105)));

    for post in posts {
        out.push_str(&format!(
            "{:<8} {:<50} {:<20} {:<25}\n",
            field(post, &["id"]),
            truncate(&field(post, &["title"]), 47),
            truncate(&field(post, &["author", "name"]), 20),
            field(post, &["created"]),
        ));
    }

    if posts.is_empty() {
        out.push_str("(no posts)\n");
    }
    out
}

fn render_meta(meta: &Value) -> String {
    let current = field(meta, &["currentPage"]);
    let pages = field(meta, &["pageCount"]);
    let total = field(meta, &["totalCount"]);

    if current.is_empty() {
        return String::new();
    }
    format!("\n📄 Page {} of {} ({} posts total)", current, pages, total)
}

fn render_post(post: &Value) -> String {
    let mut out = String::new();
    out.push_str(&format!("📝 {}\n", field(post, &["title"])));
    out.push_str(&format!(
        "   by {} · {}\n",
        field(post, &["author", "name"]),
        field(post, &["created"])
    ));

    if let Some(tags) = post.get("tags").and_then(Value::as_array) {
        let tags: Vec<&str> = tags.iter().filter_map(Value::as_str).collect();
        if !tags.is_empty() {
            out.push_str(&format!("   tags: {}\n", tags.join(", ")));
        }
    }

    let body = field(post, &["body"]);
    if !body.is_empty() {
        out.push_str(&format!("\n{}\n", body));
    }
    out
}

// Walks `path` into `value` and renders the leaf; strings without quotes
fn field(value: &Value, path: &[&str]) -> String {
    let leaf = path.iter().try_fold(value, |v, key| v.get(key));
    match leaf {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

// Cuts on char boundaries so titles with emoji don't panic
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        s.to_string()
    }
}
