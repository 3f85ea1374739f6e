use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, FormData, HtmlFormElement};

use crate::config;
use crate::dom::Listener;

pub const FORM_ID: &str = "contact-form";
pub const STATUS_ID: &str = "contact-status";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty() && !self.message.trim().is_empty()
    }
}

/// Text shown under the form once the relay has answered.
pub fn status_message(status: u16, body: &Value) -> String {
    match status {
        200 if body["ok"] == Value::Bool(true) => {
            "Thanks, your message has been sent. We'll be in touch soon.".to_string()
        }
        400 => "Please fill in your name, email and message.".to_string(),
        _ => "Sorry, something went wrong sending your message. Please try again later.".to_string(),
    }
}

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

fn show_status(status: &Option<Element>, text: &str) {
    if let Some(status) = status {
        status.set_text_content(Some(text));
    }
}

async fn submit(payload: ContactPayload) -> (u16, Value) {
    let request = match Request::post(&config::contact_endpoint()).json(&payload) {
        Ok(request) => request,
        Err(e) => {
            log::error!("Failed to serialize contact request: {:?}", e);
            return (0, Value::Null);
        }
    };
    match request.send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            (status, body)
        }
        Err(e) => {
            log::error!("Contact request failed: {:?}", e);
            (0, Value::Null)
        }
    }
}

/// Sends the contact form through the relay instead of a full page submit.
pub fn attach(document: &Document) -> Option<Listener> {
    let form = document
        .get_element_by_id(FORM_ID)?
        .dyn_into::<HtmlFormElement>()
        .ok()?;
    let status = document.get_element_by_id(STATUS_ID);
    let target = form.clone();

    Some(Listener::new(&target, "submit", move |event| {
        event.prevent_default();
        let Ok(data) = FormData::new_with_form(&form) else {
            return;
        };
        let payload = ContactPayload {
            name: field(&data, "name"),
            email: field(&data, "email"),
            message: field(&data, "message"),
        };
        if !payload.is_complete() {
            show_status(&status, &status_message(400, &Value::Null));
            return;
        }

        show_status(&status, "Sending…");
        let form = form.clone();
        let status = status.clone();
        spawn_local(async move {
            let (code, body) = submit(payload).await;
            show_status(&status, &status_message(code, &body));
            if code == 200 {
                form.reset();
            }
        });
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_needs_ok_flag() {
        assert!(status_message(200, &json!({"ok": true, "data": {}})).starts_with("Thanks"));
        assert!(status_message(200, &json!({})).starts_with("Sorry"));
    }

    #[test]
    fn validation_and_server_errors_have_their_own_text() {
        assert!(status_message(400, &json!({"error": "Missing fields"})).starts_with("Please"));
        assert!(status_message(500, &json!({"error": "Server error"})).starts_with("Sorry"));
        assert!(status_message(0, &Value::Null).starts_with("Sorry"));
    }

    #[test]
    fn blank_fields_make_an_incomplete_payload() {
        let payload = ContactPayload {
            name: "Sam".into(),
            email: " ".into(),
            message: "Hello".into(),
        };
        assert!(!payload.is_complete());
    }
}
