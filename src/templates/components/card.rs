// templates/components/card.rs
use maud::{html, Markup};

pub fn card(title: &str, content: Markup) -> Markup {
    html! {
        section class="card" {
            h3 { (title) }
            (content)
        }
    }
}
