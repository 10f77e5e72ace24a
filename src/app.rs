//! Boot and shared application state.
//!
//! One [`App`] lives for the page's lifetime. It owns the core stage and
//! menu state, the DOM registries, and the single document-level
//! mousemove/mouseup dispatcher. Element-local listeners call back into the
//! methods here; every mutation goes through the core and comes back as an
//! [`Effect`] that is applied to the DOM in the same callback, so the
//! visible state always reflects the most recent pointer sample.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use overlay::consts::MENU_HIDE_MS;
use overlay::menu::Menu;
use overlay::overlay::{Overlay, OverlayId};
use overlay::stage::{Effect, Stage};
use overlay::variant::VariantKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MouseEvent;

use crate::dom;
use crate::dom::menu_el::MenuDom;
use crate::dom::overlay_el::OverlayDom;
use crate::dom::pointer::{client_point, scroll_offset};

/// Shared state behind every event closure.
pub(crate) struct App {
    stage: RefCell<Stage>,
    menu: RefCell<Menu>,
    nodes: RefCell<HashMap<OverlayId, OverlayDom>>,
    menu_dom: RefCell<Option<MenuDom>>,
    /// Keeps the document-level dispatcher closures alive.
    dispatcher: RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>,
}

/// Initialize logging, mount the menu, and register the shared dispatcher.
pub(crate) fn boot() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A second activation on the same page; the logger is already there.
        log::debug!("scrawl: reusing installed logger");
    }

    let app = Rc::new(App {
        stage: RefCell::new(Stage::new()),
        menu: RefCell::new(Menu::new()),
        nodes: RefCell::new(HashMap::new()),
        menu_dom: RefCell::new(None),
        dispatcher: RefCell::new(Vec::new()),
    });

    let document = dom::document()?;
    let menu_dom = MenuDom::build(&document, &app)?;
    menu_dom.sync(&app.menu.borrow())?;
    *app.menu_dom.borrow_mut() = Some(menu_dom);

    register_dispatcher(&app, &document)?;
    log::info!("scrawl ready");
    Ok(())
}

/// Register the single document-level mousemove/mouseup pair that serves
/// every overlay. Per-overlay cleanup never touches these listeners: the
/// stage just clears its active-owner reference.
fn register_dispatcher(app: &Rc<App>, document: &web_sys::Document) -> Result<(), JsValue> {
    let mut closures = app.dispatcher.borrow_mut();

    let on_move = Closure::wrap(Box::new({
        let app = Rc::clone(app);
        move |ev: MouseEvent| app.pointer_moved(&ev)
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    closures.push(on_move);

    let on_up = Closure::wrap(Box::new({
        let app = Rc::clone(app);
        move |ev: MouseEvent| app.pointer_up(&ev)
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mouseup", on_up.as_ref().unchecked_ref())?;
    closures.push(on_up);

    Ok(())
}

impl App {
    // ── Document-level dispatch ─────────────────────────────────

    fn pointer_moved(&self, ev: &MouseEvent) {
        let client = client_point(ev);

        let revealed = Menu::pointer_near_corner(client) && self.menu.borrow_mut().reveal();
        if revealed {
            self.sync_menu();
        }

        let Ok(scroll) = scroll_offset() else {
            return;
        };
        // Keep text selection from fighting an in-flight gesture.
        if self.stage.borrow().active().is_some() {
            ev.prevent_default();
        }
        let effect = self.stage.borrow_mut().pointer_moved(client, scroll);
        self.apply(effect);
    }

    fn pointer_up(&self, ev: &MouseEvent) {
        let Ok(scroll) = scroll_offset() else {
            return;
        };
        let effect = self.stage.borrow_mut().pointer_up(client_point(ev), scroll);
        self.apply(effect);
    }

    // ── Overlay element callbacks ───────────────────────────────

    pub(crate) fn press_overlay(&self, id: OverlayId, ev: &MouseEvent) {
        // The text box lets presses on its input region through for editing.
        let ignored = self
            .nodes
            .borrow()
            .get(&id)
            .is_some_and(|dom| dom.press_targets_input(ev));
        if ignored {
            return;
        }
        ev.prevent_default();
        let Ok(scroll) = scroll_offset() else {
            return;
        };
        let effect = self.stage.borrow_mut().begin_drag(id, client_point(ev), scroll);
        self.apply(effect);
    }

    pub(crate) fn press_resize(&self, id: OverlayId, ev: &MouseEvent) {
        // Without this the container would also see the press and start a drag.
        ev.stop_propagation();
        let effect = self.stage.borrow_mut().begin_resize(id, client_point(ev));
        self.apply(effect);
    }

    pub(crate) fn enter_overlay(&self, id: OverlayId) {
        let effect = self.stage.borrow_mut().hover_enter(id);
        self.apply(effect);
    }

    pub(crate) fn leave_overlay(&self, id: OverlayId) {
        let effect = self.stage.borrow_mut().hover_leave(id);
        self.apply(effect);
    }

    pub(crate) fn delete_overlay(&self, id: OverlayId) {
        let effect = self.stage.borrow_mut().remove(id);
        self.apply(effect);
    }

    pub(crate) fn toggle_font(&self, id: OverlayId) {
        let effect = self.stage.borrow_mut().cycle_font_size(id);
        self.apply(effect);
    }

    // ── Menu callbacks ──────────────────────────────────────────

    pub(crate) fn create_overlay(app: &Rc<App>, kind: VariantKind) {
        if let Err(err) = Self::try_create_overlay(app, kind) {
            log::warn!("overlay creation failed: {err:?}");
        }
    }

    fn try_create_overlay(app: &Rc<App>, kind: VariantKind) -> Result<(), JsValue> {
        let scroll = scroll_offset()?;
        let (id, color) = {
            let mut menu = app.menu.borrow_mut();
            let id = menu.next_id();
            (id, menu.selected_color().to_owned())
        };
        let overlay = Overlay::place(id, kind, color, scroll);

        let document = dom::document()?;
        let node = OverlayDom::build(&document, &overlay, app)?;
        node.sync(&overlay)?;
        app.nodes.borrow_mut().insert(id, node);
        app.stage.borrow_mut().insert(overlay);
        log::debug!("overlay {id} created ({kind:?})");
        Ok(())
    }

    pub(crate) fn select_color(&self, index: usize) {
        self.menu.borrow_mut().select(index);
        self.sync_menu();
    }

    /// Play the hide transition, then finalize to non-rendered after the
    /// delay. The timeout is fire-and-forget: if the menu was re-revealed in
    /// the meantime, `finish_hide` declines and nothing is applied.
    pub(crate) fn close_menu(app: &Rc<App>) {
        let started = app.menu.borrow_mut().begin_hide();
        if !started {
            return;
        }
        app.sync_menu();

        let app = Rc::clone(app);
        Timeout::new(MENU_HIDE_MS, move || {
            if app.menu.borrow_mut().finish_hide() {
                app.sync_menu();
            }
        })
        .forget();
    }

    // ── Effect application ──────────────────────────────────────

    /// Apply a core effect to the DOM. A missing node (not yet built, or
    /// already torn down) makes the style application a no-op rather than a
    /// fault.
    fn apply(&self, effect: Effect) {
        let result = match effect {
            Effect::None => Ok(()),
            Effect::Moved { id } => self.sync_overlay(id, false),
            Effect::Updated { id } => self.sync_overlay(id, true),
            Effect::Removed { id } => {
                if let Some(node) = self.nodes.borrow_mut().remove(&id) {
                    node.remove();
                }
                log::debug!("overlay {id} deleted");
                Ok(())
            }
        };
        if let Err(err) = result {
            log::warn!("restyle failed: {err:?}");
        }
    }

    fn sync_overlay(&self, id: OverlayId, full: bool) -> Result<(), JsValue> {
        let stage = self.stage.borrow();
        let Some(overlay) = stage.get(id) else {
            return Ok(());
        };
        let nodes = self.nodes.borrow();
        let Some(node) = nodes.get(&id) else {
            return Ok(());
        };
        if full {
            node.sync(overlay)
        } else {
            node.sync_layout(overlay)
        }
    }

    fn sync_menu(&self) {
        let menu = self.menu.borrow();
        if let Some(menu_dom) = self.menu_dom.borrow().as_ref() {
            if let Err(err) = menu_dom.sync(&menu) {
                log::warn!("menu restyle failed: {err:?}");
            }
        }
    }
}
