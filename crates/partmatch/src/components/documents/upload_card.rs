use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::components::{use_app_state, use_controller, ControllerMessage};
use partmatch_core::api::UploadFile;

/// Upload card with a single PDF picker.
///
/// The file input lives inside the button label and is remounted (via
/// its `key`) after every selection, so picking the same file twice in
/// a row still fires a change event.
#[component]
pub fn UploadCard() -> Element {
    let state = use_app_state();
    let controller = use_controller();
    let mut input_epoch = use_signal(|| 0u32);

    let busy = state.read().is_busy();

    let handle_change = move |evt: FormEvent| {
        spawn(async move {
            if let Some(file) = evt.files().into_iter().next() {
                let file_name = file.name().to_string();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        controller.send(ControllerMessage::Upload(UploadFile {
                            filename: file_name,
                            bytes: bytes.to_vec(),
                        }));
                    }
                    Err(e) => {
                        error!("Failed to read {}: {}", file_name, e);
                    }
                }
            }
            // Remount the input so the same file can be selected again
            input_epoch += 1;
        });
    };

    rsx! {
        section { class: "pm-card pm-upload-card",
            div { class: "pm-upload-header",
                h2 { class: "pm-card-title", "Upload Document" }
                label {
                    class: if busy { "pm-btn pm-btn--primary pm-btn--disabled" } else { "pm-btn pm-btn--primary" },
                    "Upload PDF"
                    input {
                        key: "{input_epoch}",
                        r#type: "file",
                        class: "pm-upload-input",
                        accept: ".pdf",
                        disabled: busy,
                        onchange: handle_change,
                    }
                }
            }
            p { class: "pm-card-subtitle",
                "Upload an invoice or purchase order to process"
            }
        }
    }
}
