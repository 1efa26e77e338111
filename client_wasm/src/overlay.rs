//! DOM game-over overlay: a panel toggled with the `hidden` class and a
//! text element that receives the final score.

use game_core::GameOverPanel;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

const HIDDEN_CLASS: &str = "hidden";

pub struct DomOverlay {
    panel: HtmlElement,
    score_text: Element,
}

impl DomOverlay {
    pub fn new(document: &Document, panel_id: &str, score_id: &str) -> Result<Self, JsValue> {
        let panel = element_by_id(document, panel_id)?.dyn_into::<HtmlElement>()?;
        let score_text = element_by_id(document, score_id)?;
        Ok(Self { panel, score_text })
    }
}

impl GameOverPanel for DomOverlay {
    fn show(&mut self, score_text: &str) {
        self.score_text.set_text_content(Some(score_text));
        if let Err(e) = self.panel.class_list().remove_1(HIDDEN_CLASS) {
            tracing::warn!(error = ?e, "could not reveal game over panel");
        }
    }

    fn hide(&mut self) {
        if let Err(e) = self.panel.class_list().add_1(HIDDEN_CLASS) {
            tracing::warn!(error = ?e, "could not hide game over panel");
        }
    }
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}
