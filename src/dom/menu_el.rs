//! The floating creation menu's DOM: title, close control, palette swatches,
//! and one creation button per variant.
//!
//! Built once at boot and kept for the page's lifetime; visibility is driven
//! by the core menu state and applied here.

use std::rc::Rc;

use overlay::consts::PALETTE;
use overlay::menu::Menu;
use overlay::style;
use overlay::variant::VariantKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::app::App;
use crate::dom;

/// DOM handle for the menu dialog. Never destroyed.
pub(crate) struct MenuDom {
    dialog: HtmlElement,
    swatches: Vec<HtmlElement>,
    /// Keeps the button listeners alive for the page's lifetime.
    _closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
}

impl MenuDom {
    /// Build and mount the dialog. Host-page text styling is neutralized on
    /// every menu element so the chrome renders the same on any page.
    pub(crate) fn build(document: &Document, app: &Rc<App>) -> Result<Self, JsValue> {
        let mut closures = Vec::new();

        let dialog = dom::create(document, "div")?;
        dom::apply(&dialog, &style::menu_reset())?;
        dialog.set_inner_text("Scrawl");

        let close = dom::create(document, "button")?;
        dom::apply(&close, &style::menu_reset())?;
        dom::apply(&close, &style::menu_close_button())?;
        close.set_inner_text("✖");
        dom::listen(&close, "click", &mut closures, {
            let app = Rc::clone(app);
            move |_| App::close_menu(&app)
        })?;
        dialog.append_child(&close)?;

        let palette_row = dom::create(document, "div")?;
        dom::apply(&palette_row, &style::menu_reset())?;
        let mut swatches = Vec::new();
        for (index, color) in PALETTE.iter().enumerate() {
            let swatch = dom::create(document, "button")?;
            swatch.set_attribute("data-value", color)?;
            dom::apply(&swatch, &style::swatch(color, false))?;
            dom::listen(&swatch, "click", &mut closures, {
                let app = Rc::clone(app);
                move |_| app.select_color(index)
            })?;
            palette_row.append_child(&swatch)?;
            swatches.push(swatch);
        }
        dialog.append_child(&palette_row)?;

        let action_row = dom::create(document, "div")?;
        dom::apply(&action_row, &style::menu_reset())?;
        dom::apply(&action_row, &style::menu_action_row())?;
        for kind in VariantKind::ALL {
            let button = dom::create(document, "button")?;
            button.set_inner_html(&kind.icon_svg());
            dom::apply(&button, &style::menu_icon_button())?;
            dom::listen(&button, "click", &mut closures, {
                let app = Rc::clone(app);
                move |_| App::create_overlay(&app, kind)
            })?;
            action_row.append_child(&button)?;
        }
        dialog.append_child(&action_row)?;

        dom::body(document)?.append_child(&dialog)?;

        Ok(Self {
            dialog,
            swatches,
            _closures: closures,
        })
    }

    /// Re-apply the dialog chrome for the current visibility phase and the
    /// swatch outlines for the current selection.
    pub(crate) fn sync(&self, menu: &Menu) -> Result<(), JsValue> {
        dom::apply(&self.dialog, &style::menu_dialog(menu))?;
        for (index, swatch) in self.swatches.iter().enumerate() {
            let (prop, value) = style::swatch_outline(menu.swatch_selected(index));
            swatch.style().set_property(prop, &value)?;
        }
        Ok(())
    }
}

