use chrono::{Datelike, Local};
use dioxus::prelude::*;

/// Footer line below the main content
#[component]
pub fn Footer() -> Element {
    let year = Local::now().year();

    rsx! {
        footer { class: "pm-footer",
            span { class: "pm-footer-text",
                "Invoice Parts Matcher © {year}"
            }
        }
    }
}
