// templates/layouts/desktop.rs
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "아파트 정보 수집기" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; }
header { display: flex; align-items: center; justify-content: space-between;
         padding: 0.5rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
header nav ul { list-style: none; display: flex; gap: 1rem; margin: 0; padding: 0; }
main.container { max-width: 1080px; margin: 2rem auto; padding: 0 1rem; }
section.card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem 1.5rem;
               margin-bottom: 1.5rem; }
form label { display: block; margin-top: 0.75rem; font-weight: 600; }
form input[type="text"] { padding: 8px; font-size: 16px; width: 16rem; }
form button { margin-top: 1rem; padding: 8px 16px; font-size: 16px; cursor: pointer; }
table.preview { border-collapse: collapse; font-size: 0.85rem; }
table.preview th, table.preview td { border: 1px solid #ccc; padding: 4px 8px;
                                     white-space: nowrap; }
div.scroll { overflow-x: auto; }
p.warning { color: #b45309; }
"#;
