use crate::api::WELCOME_MESSAGE;
use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

// Carried over from the original stylesheet, inlined because the app
// serves no static files.
const STYLESHEET: &str = r#"
body {
  margin: 0;
  text-align: center;
  font-family: 'Segoe UI', sans-serif;
  background-color: #f5f5f5;
}
.app-header {
  background-color: #004d40;
  color: white;
  padding: 50px 20px;
}
.app-header h1 { font-size: 4rem; margin-bottom: 10px; }
.app-header p { font-size: 1.5rem; }
main { padding: 20px; }
section {
  margin: 20px auto;
  max-width: 600px;
  background-color: white;
  padding: 20px;
  border-radius: 12px;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
}
footer { background-color: #004d40; color: white; padding: 10px; }
.listing-form { display: flex; flex-direction: column; gap: 10px; margin-top: 15px; }
.listing-form input { padding: 10px; border: 1px solid #ccc; border-radius: 8px; }
.listing-form button {
  padding: 10px;
  background-color: #004d40;
  color: white;
  border: none;
  border-radius: 8px;
  cursor: pointer;
  font-weight: bold;
}
.listing-form button:hover { background-color: #00695c; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    let year = Utc::now().year();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header class="app-header" {
                    h1 { "🏠 PaLevel" }
                    p { (WELCOME_MESSAGE) }
                    p { "Student Accommodation Finder for Zambia" }
                }
                (content)
                footer {
                    p { "© " (year) " PaLevel. All rights reserved." }
                }
            }
        }
    }
}
