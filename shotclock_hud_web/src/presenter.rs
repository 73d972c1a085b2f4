// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM panel management.
//!
//! [`DomOverlay`] builds the overlay panel once and then rewrites its text on
//! every [`present`](DomOverlay::present). Text goes through `textContent`,
//! so page-supplied strings such as the client name are never parsed as
//! HTML.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement};

use shotclock_hud_core::action::OverlayAction;
use shotclock_hud_core::view::{OverlayView, PANEL_STYLE};

/// The overlay panel and its child nodes.
///
/// Layout, top to bottom: four info lines, the button row (at most one
/// button visible), and the time line.
pub struct DomOverlay {
    panel: HtmlElement,
    lines: [HtmlElement; 4],
    /// Indexed like [`OverlayAction::ALL`].
    buttons: [HtmlElement; 2],
    time: HtmlElement,
    _on_click: Vec<Closure<dyn FnMut()>>,
}

impl core::fmt::Debug for DomOverlay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomOverlay")
            .field("panel", &"HtmlElement")
            .finish_non_exhaustive()
    }
}

impl DomOverlay {
    /// Creates the panel and appends it to `document.body`.
    ///
    /// `on_action` runs when a button is clicked.
    pub fn mount(
        document: &Document,
        on_action: impl Fn(OverlayAction) + 'static,
    ) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let panel = create(document, "div")?;
        apply_style(&panel, PANEL_STYLE);

        let mut lines = Vec::with_capacity(4);
        for _ in 0..4 {
            let line = create(document, "span")?;
            let br = document.create_element("br")?;
            panel.append_child(&line)?;
            panel.append_child(&br)?;
            lines.push(line);
        }

        let on_action: Rc<dyn Fn(OverlayAction)> = Rc::new(on_action);
        let mut buttons = Vec::with_capacity(OverlayAction::ALL.len());
        let mut on_click = Vec::with_capacity(OverlayAction::ALL.len());
        for action in OverlayAction::ALL {
            let button = create(document, "button")?;
            button.set_attribute("type", "button")?;
            button.set_text_content(Some(action.caption()));
            apply_style(&button, action.button_style());
            let _ = button.style().set_property("display", "none");

            let handler = Rc::clone(&on_action);
            let closure = Closure::wrap(Box::new(move || handler(action)) as Box<dyn FnMut()>);
            button.set_onclick(Some(closure.as_ref().unchecked_ref()));

            panel.append_child(&button)?;
            buttons.push(button);
            on_click.push(closure);
        }
        let br = document.create_element("br")?;
        panel.append_child(&br)?;

        let time = create(document, "span")?;
        panel.append_child(&time)?;

        body.append_child(&panel)?;

        Ok(Self {
            panel,
            lines: into_array(lines)?,
            buttons: into_array(buttons)?,
            time,
            _on_click: on_click,
        })
    }

    /// Returns the panel element.
    #[must_use]
    pub fn panel(&self) -> &HtmlElement {
        &self.panel
    }

    /// Replaces the panel contents with `view`.
    pub fn present(&self, view: &OverlayView) {
        for (el, text) in self.lines.iter().zip(view.lines()) {
            el.set_text_content(Some(&text));
        }
        for (button, action) in self.buttons.iter().zip(OverlayAction::ALL) {
            let s = button.style();
            if view.shows(action) {
                let _ = s.remove_property("display");
            } else {
                let _ = s.set_property("display", "none");
            }
        }
        self.time.set_text_content(Some(&view.time_line()));
    }
}

impl Drop for DomOverlay {
    fn drop(&mut self) {
        for button in &self.buttons {
            button.set_onclick(None);
        }
        self.panel.remove();
    }
}

fn create(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(document.create_element(tag)?.unchecked_into())
}

fn apply_style(el: &HtmlElement, style: &[(&str, &str)]) {
    let s = el.style();
    for (property, value) in style {
        let _ = s.set_property(property, value);
    }
}

fn into_array<const N: usize>(v: Vec<HtmlElement>) -> Result<[HtmlElement; N], JsValue> {
    v.try_into()
        .map_err(|_| JsValue::from_str("overlay panel built with the wrong number of nodes"))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use alloc::string::String;

    use wasm_bindgen_test::*;

    use shotclock_hud_core::status::StatusLabel;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().and_then(|w| w.document()).unwrap()
    }

    fn view(status: StatusLabel) -> OverlayView {
        OverlayView {
            client_name: String::from("display-1"),
            action: status.offered_action(),
            status,
            active_clocks: 3,
            running_clocks: 1,
            timestamp: String::from("now"),
        }
    }

    fn visible(overlay: &DomOverlay) -> usize {
        overlay
            .buttons
            .iter()
            .filter(|b| b.style().get_property_value("display").unwrap() != "none")
            .count()
    }

    #[wasm_bindgen_test]
    fn at_most_one_button_is_visible() {
        let overlay = DomOverlay::mount(&document(), |_| {}).unwrap();
        assert_eq!(visible(&overlay), 0, "no button before the first render");

        overlay.present(&view(StatusLabel::disconnected()));
        assert_eq!(visible(&overlay), 1);
        assert_ne!(overlay.buttons[0].style().get_property_value("display").unwrap(), "none");

        overlay.present(&view(StatusLabel::connected()));
        assert_eq!(visible(&overlay), 1);
        assert_ne!(overlay.buttons[1].style().get_property_value("display").unwrap(), "none");

        overlay.present(&view(StatusLabel::new("Connecting")));
        assert_eq!(visible(&overlay), 0);
    }

    #[wasm_bindgen_test]
    fn present_writes_text_lines() {
        let overlay = DomOverlay::mount(&document(), |_| {}).unwrap();
        overlay.present(&view(StatusLabel::connected()));
        assert_eq!(overlay.lines[0].text_content().as_deref(), Some("Client: display-1"));
        assert_eq!(overlay.lines[1].text_content().as_deref(), Some("WS Status: Connected"));
        assert_eq!(overlay.time.text_content().as_deref(), Some("Time: now"));
    }

    #[wasm_bindgen_test]
    fn drop_removes_the_panel() {
        let overlay = DomOverlay::mount(&document(), |_| {}).unwrap();
        let panel = overlay.panel().clone();
        assert!(panel.is_connected());
        drop(overlay);
        assert!(!panel.is_connected());
    }
}
