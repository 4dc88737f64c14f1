use crate::constants::CONTACT_FORM_ID;
use crate::dom;
use crate::js::js_err;
use site_core::{outcome_notice, SubmissionSink};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Text fields of the form as name/value pairs; file inputs are skipped.
fn collect_fields(form: &web::HtmlFormElement) -> anyhow::Result<Vec<(String, String)>> {
    let data = web::FormData::new_with_form(form).map_err(js_err)?;
    let mut fields = Vec::new();
    if let Some(iter) = js_sys::try_iter(&data).map_err(js_err)? {
        for entry in iter {
            let pair: js_sys::Array = entry.map_err(js_err)?.unchecked_into();
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push((name, value));
            }
        }
    }
    Ok(fields)
}

/// Intercept contact form submission and hand the fields to `sink`.
pub fn setup(document: &web::Document, sink: Rc<dyn SubmissionSink>) -> anyhow::Result<()> {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[form] no #{CONTACT_FORM_ID}");
        return Ok(());
    };

    let target = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let result = match collect_fields(&target) {
            Ok(fields) => sink.submit(&fields),
            Err(e) => Err(site_core::SiteError::Submission(e.to_string())),
        };
        let (notice, clear) = outcome_notice(&result);
        if let Some(w) = web::window() {
            _ = w.alert_with_message(notice);
        }
        if clear {
            target.reset();
        }
    });
    log::info!("[form] contact form wired");
    Ok(())
}
