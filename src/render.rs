//! HTML pages served by the form transport and the docs route.

use crate::types::Todo;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn home_page(todos: &[Todo]) -> String {
    let mut items = String::new();
    for todo in todos {
        items.push_str(&format!(
            r#"
      <li class="{class}">
        <form method="post" action="/update/{id}">
          <input type="text" name="title" value="{title}" required>
          <input type="checkbox" name="completed" value="on"{checked}>
          <button type="submit">Update</button>
        </form>
        <form method="post" action="/delete/{id}">
          <button type="submit">Delete</button>
        </form>
      </li>"#,
            id = todo.id,
            title = escape_html(&todo.title),
            class = if todo.completed { "done" } else { "open" },
            checked = if todo.completed { " checked" } else { "" },
        ));
    }

    if todos.is_empty() {
        items.push_str("\n      <li class=\"empty\">Nothing to do.</li>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Todo List</title>
    <style>
      li.done input[type=text] {{ text-decoration: line-through; }}
      li form {{ display: inline; }}
    </style>
  </head>
  <body>
    <h1>Todo List</h1>
    <form method="post" action="/add">
      <input type="text" name="title" placeholder="New todo" required>
      <button type="submit">Add</button>
    </form>
    <ul>{items}
    </ul>
  </body>
</html>
"#
    )
}

/// Swagger UI shell pointed at the served OpenAPI document.
pub fn docs_page(spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Todo API - Docs</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.ui = SwaggerUIBundle({{ url: "{url}", dom_id: "#swagger-ui" }});
    </script>
  </body>
</html>
"##,
        url = escape_html(spec_url),
    )
}
