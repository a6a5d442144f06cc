//! Checkout session creation — an external network collaborator, entirely
//! outside the choreography core. The button fires a POST and the resulting
//! session id is logged and stashed on the button for the shop page markup.

use crate::constants::{CHECKOUT_BUTTON_ID, CHECKOUT_ENDPOINT};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire_checkout_button(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, CHECKOUT_BUTTON_ID, move || {
        let doc = doc.clone();
        spawn_local(async move {
            match create_session().await {
                Ok(session_id) => {
                    log::info!("[checkout] session {session_id}");
                    if let Some(el) = doc.get_element_by_id(CHECKOUT_BUTTON_ID) {
                        _ = el.set_attribute("data-session-id", &session_id);
                    }
                }
                Err(e) => log::error!("[checkout] {e:?}"),
            }
        });
    });
}

async fn create_session() -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    let fetched = JsFuture::from(window.fetch_with_str_and_init(CHECKOUT_ENDPOINT, &opts))
        .await
        .map_err(|e| anyhow!("{e:?}"))?;
    let resp: web::Response = fetched.dyn_into().map_err(|e| anyhow!("{e:?}"))?;
    if !resp.ok() {
        return Err(anyhow!("checkout endpoint returned {}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow!("{e:?}"))?)
        .await
        .map_err(|e| anyhow!("{e:?}"))?;
    Ok(text.as_string().unwrap_or_default())
}
