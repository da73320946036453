use dioxus::prelude::*;

/// Main body layout component (to be wrapped in HTML shell)
#[component]
pub fn LayoutBody(children: Element) -> Element {
    rsx! {
        header { class: "site-header",
            a { class: "site-title", href: "/", "ROSTER" }
        }
        main { class: "container",
            {children}
        }
        footer { class: "site-footer", "Cricket squad manager" }
    }
}

/// Wraps the rendered body in a full HTML document
pub fn wrap_in_html_shell(body_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Roster</title>
    <link rel="stylesheet" href="/assets/roster.css">
</head>
<body>
{}
</body>
</html>"#,
        body_content
    )
}
