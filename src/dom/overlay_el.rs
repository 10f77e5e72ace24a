//! One overlay's DOM subtree: container, variant body, and affordances.
//!
//! Element-local listeners (press, enter/leave, delete, font toggle) are
//! attached here and forward into [`crate::app::App`]; document-level
//! move/up traffic never touches these nodes — it is routed by the shared
//! dispatcher through the core stage.

use std::rc::Rc;

use overlay::overlay::Overlay;
use overlay::style;
use overlay::variant::BodyKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlTextAreaElement, MouseEvent};

use crate::app::App;
use crate::dom::{self, pointer};

/// The variant's visual body element.
enum BodyEl {
    Plain(HtmlElement),
    Input(HtmlTextAreaElement),
}

impl BodyEl {
    fn element(&self) -> &HtmlElement {
        match self {
            BodyEl::Plain(el) => el,
            BodyEl::Input(el) => el,
        }
    }
}

/// DOM handle for one placed overlay. Dropped (and detached) on deletion.
pub(crate) struct OverlayDom {
    container: HtmlElement,
    body: BodyEl,
    resize_handle: HtmlElement,
    delete_button: HtmlElement,
    font_toggle: Option<HtmlElement>,
    ignore_input_press: bool,
    /// Keeps the element listeners alive for the overlay's lifetime.
    _closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl OverlayDom {
    /// Build and mount the subtree for a freshly placed overlay, wiring its
    /// element-local listeners back into the app. The text box body takes
    /// focus once attached.
    pub(crate) fn build(document: &Document, o: &Overlay, app: &Rc<App>) -> Result<Self, JsValue> {
        let id = o.id;
        let spec = o.kind.spec();
        let mut closures = Vec::new();

        let container = dom::create(document, "div")?;
        container.set_attribute("data-overlay-id", &id.to_string())?;

        let body = match spec.body {
            BodyKind::Plain => BodyEl::Plain(dom::create(document, "div")?),
            BodyKind::Input => {
                let area: HtmlTextAreaElement = dom::create(document, "textarea")?.unchecked_into();
                area.set_placeholder("Enter text");
                BodyEl::Input(area)
            }
        };
        container.append_child(body.element())?;

        let delete_button = dom::create(document, "div")?;
        dom::apply(&delete_button, &style::delete_button())?;
        let delete_label = dom::create(document, "div")?;
        delete_label.set_inner_text("×");
        dom::apply(&delete_label, &style::delete_label())?;
        delete_button.append_child(&delete_label)?;
        container.append_child(&delete_button)?;

        let resize_handle = dom::create(document, "div")?;
        dom::apply(&resize_handle, &style::resize_handle())?;
        container.append_child(&resize_handle)?;

        let font_toggle = if spec.font_toggle {
            let toggle = dom::create(document, "div")?;
            toggle.set_inner_text("A");
            dom::apply(&toggle, &style::font_toggle())?;
            container.append_child(&toggle)?;
            Some(toggle)
        } else {
            None
        };

        dom::listen(&container, "mousedown", &mut closures, {
            let app = Rc::clone(app);
            move |ev| app.press_overlay(id, &ev)
        })?;
        dom::listen(&container, "mouseenter", &mut closures, {
            let app = Rc::clone(app);
            move |_| app.enter_overlay(id)
        })?;
        dom::listen(&container, "mouseleave", &mut closures, {
            let app = Rc::clone(app);
            move |_| app.leave_overlay(id)
        })?;
        dom::listen(&resize_handle, "mousedown", &mut closures, {
            let app = Rc::clone(app);
            move |ev| app.press_resize(id, &ev)
        })?;
        dom::listen(&delete_button, "click", &mut closures, {
            let app = Rc::clone(app);
            move |_| app.delete_overlay(id)
        })?;
        if let Some(toggle) = &font_toggle {
            dom::listen(toggle, "click", &mut closures, {
                let app = Rc::clone(app);
                move |_| app.toggle_font(id)
            })?;
        }

        dom::body(document)?.append_child(&container)?;
        if let BodyEl::Input(area) = &body {
            area.focus()?;
        }

        Ok(Self {
            container,
            body,
            resize_handle,
            delete_button,
            font_toggle,
            ignore_input_press: spec.ignore_press_on_input,
            _closures: closures,
        })
    }

    /// Re-apply the container layout only (used for drag moves).
    pub(crate) fn sync_layout(&self, o: &Overlay) -> Result<(), JsValue> {
        dom::apply(&self.container, &style::container(o))
    }

    /// Re-apply container, body, and affordance visibility.
    pub(crate) fn sync(&self, o: &Overlay) -> Result<(), JsValue> {
        dom::apply(&self.container, &style::container(o))?;
        dom::apply(self.body.element(), &style::body(o))?;

        let affordances = o.affordances();
        set_visibility(&self.resize_handle, affordances.resize_handle)?;
        set_visibility(&self.delete_button, affordances.delete)?;
        if let Some(toggle) = &self.font_toggle {
            set_visibility(toggle, affordances.font_toggle)?;
        }
        Ok(())
    }

    /// Whether a press should be left to the variant's input region instead
    /// of starting a drag.
    pub(crate) fn press_targets_input(&self, ev: &MouseEvent) -> bool {
        if !self.ignore_input_press {
            return false;
        }
        match &self.body {
            BodyEl::Input(area) => pointer::targets_node(ev, area),
            BodyEl::Plain(_) => false,
        }
    }

    /// Detach the subtree from the document if still attached. Idempotent:
    /// deleting an already-detached overlay is a no-op.
    pub(crate) fn remove(&self) {
        if self.container.parent_node().is_some() {
            self.container.remove();
        }
    }
}

fn set_visibility(el: &HtmlElement, shown: bool) -> Result<(), JsValue> {
    let (prop, value) = style::visibility(shown);
    el.style().set_property(prop, &value)
}
