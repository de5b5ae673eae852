use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use visitmap::list::ROW_CLASS;
use visitmap::{App, Legend, ListRow, MapScene, ShapeStyle, Stats, ViewState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error;
use crate::interop::describe;
use crate::options::DomIds;
use crate::storage::BrowserStorage;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const PANEL_HEADER_ACTIVE: &str = "active";
const PANEL_GRID_SHOW: &str = "show";

type Listener = Closure<dyn FnMut(Event)>;

fn listener(f: impl FnMut(Event) + 'static) -> Listener {
    Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>)
}

/// A callback registered on `target`; removed from it again on drop.
struct Bound {
    target: EventTarget,
    event: &'static str,
    cb: Listener,
}

impl Bound {
    fn attach(target: &EventTarget, event: &'static str, cb: Listener) -> Result<Bound, JsValue> {
        dom(target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()))?;
        Ok(Bound { target: target.clone(), event, cb })
    }
}

impl Drop for Bound {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.cb.as_ref().unchecked_ref());
    }
}

fn dom<T>(r: Result<T, JsValue>) -> Result<T, JsValue> {
    r.map_err(|e| error::dom(&e))
}

/// Widget state shared with DOM callbacks. Callbacks hold `Weak` handles.
pub(crate) struct Shared {
    pub app: App<BrowserStorage>,
    pub view: DomView,
}

pub(crate) type SharedRef = Rc<RefCell<Shared>>;

impl Shared {
    /// First render: map, legend, one full sync, then panel wiring.
    pub fn mount(shared: &SharedRef) -> Result<(), JsValue> {
        let weak = Rc::downgrade(shared);
        let mut guard = shared.borrow_mut();
        let Shared { app, view } = &mut *guard;
        let scene = app.scene();
        view.draw_map(&scene, &weak)?;
        view.draw_legend(&scene.legend)?;
        view.sync(&app.view_state())?;
        view.wire_chrome(&weak)?;
        view.set_panel(app.panel_open())?;
        log::info!("mounted {} municipalities", scene.shapes.len());
        Ok(())
    }

    /// Toggle `id`, then restyle every shape and rebuild list and stats.
    pub fn toggle(shared: &SharedRef, id: &str) -> Result<bool, JsValue> {
        let mut guard = shared.borrow_mut();
        let Shared { app, view } = &mut *guard;
        let state = app.toggle(id).map_err(|e| error::store(&e))?;
        view.sync(&state)?;
        Ok(app.is_visited(id))
    }

    pub fn reset(shared: &SharedRef) -> Result<(), JsValue> {
        let mut guard = shared.borrow_mut();
        let Shared { app, view } = &mut *guard;
        let state = app.reset().map_err(|e| error::store(&e))?;
        view.sync(&state)
    }

    pub fn resync(shared: &SharedRef) -> Result<(), JsValue> {
        let guard = shared.borrow();
        guard.view.sync(&guard.app.view_state())
    }

    pub fn toggle_panel(shared: &SharedRef) -> Result<bool, JsValue> {
        let mut guard = shared.borrow_mut();
        let Shared { app, view } = &mut *guard;
        let open = app.toggle_panel();
        view.set_panel(open)?;
        Ok(open)
    }

    fn hover(shared: &SharedRef, id: &str, el: &Element, entering: bool) {
        let Ok(guard) = shared.try_borrow() else { return };
        let style = if entering { guard.app.hover_style(id) } else { guard.app.base_style(id) };
        if let Some(style) = style {
            if let Err(e) = apply_style(el, &style) {
                log::warn!("hover restyle of '{}' failed: {}", id, describe(&e));
            }
        }
    }
}

fn toggle_from_event(weak: &Weak<RefCell<Shared>>, id: &str) {
    let Some(shared) = weak.upgrade() else { return };
    if let Err(e) = Shared::toggle(&shared, id) {
        log::error!("toggle '{}' failed: {}", id, describe(&e));
    }
}

fn apply_style(el: &Element, style: &ShapeStyle) -> Result<(), JsValue> {
    for (name, value) in style.attributes() {
        match value {
            Some(v) => el.set_attribute(name, &v)?,
            None => el.remove_attribute(name)?,
        }
    }
    Ok(())
}

/// DOM side of the widget: the SVG map, legend, list, stats and panel.
///
/// Dropping it removes every listener it registered; the elements stay.
pub(crate) struct DomView {
    document: Document,
    ids: DomIds,
    map: Element,
    shapes: HashMap<String, Element>,
    shape_listeners: Vec<Bound>,
    chrome_listeners: Vec<Bound>,
}

impl DomView {
    pub fn attach(ids: DomIds) -> Result<DomView, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| error::missing_element("document"))?;
        let map = document
            .get_element_by_id(&ids.map)
            .ok_or_else(|| error::missing_element(&format!("#{}", ids.map)))?;
        Ok(DomView {
            document,
            ids,
            map,
            shapes: HashMap::new(),
            shape_listeners: Vec::new(),
            chrome_listeners: Vec::new(),
        })
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn svg(&self, tag: &str) -> Result<Element, JsValue> {
        dom(self.document.create_element_ns(Some(SVG_NS), tag))
    }

    fn html(&self, tag: &str) -> Result<Element, JsValue> {
        dom(self.document.create_element(tag))
    }

    fn draw_map(&mut self, scene: &MapScene, weak: &Weak<RefCell<Shared>>) -> Result<(), JsValue> {
        self.shape_listeners.clear();
        self.map.set_text_content(None);
        self.shapes.clear();

        let svg = self.map.clone();
        dom(svg.set_attribute("viewBox", &scene.view_box()))?;
        dom(svg.set_attribute("preserveAspectRatio", "xMidYMid meet"))?;

        let defs = self.svg("defs")?;
        let filter = self.svg("filter")?;
        for (k, v) in [("id", scene.glow.id.as_str()), ("x", "-50%"), ("y", "-50%"), ("width", "200%"), ("height", "200%")] {
            dom(filter.set_attribute(k, v))?;
        }
        let blur = self.svg("feGaussianBlur")?;
        dom(blur.set_attribute("stdDeviation", &scene.glow.std_deviation.to_string()))?;
        dom(blur.set_attribute("result", "coloredBlur"))?;
        let merge = self.svg("feMerge")?;
        for input in ["coloredBlur", "SourceGraphic"] {
            let node = self.svg("feMergeNode")?;
            dom(node.set_attribute("in", input))?;
            dom(merge.append_child(&node))?;
        }
        dom(filter.append_child(&blur))?;
        dom(filter.append_child(&merge))?;
        dom(defs.append_child(&filter))?;
        dom(svg.append_child(&defs))?;

        let bg = self.svg("rect")?;
        dom(bg.set_attribute("width", &scene.width.to_string()))?;
        dom(bg.set_attribute("height", &scene.height.to_string()))?;
        dom(bg.set_attribute("fill", &scene.background))?;
        dom(svg.append_child(&bg))?;

        for shape in &scene.shapes {
            let group = self.svg("g")?;
            dom(group.set_attribute("class", "municipality-group"))?;

            let path = self.svg("path")?;
            for (k, v) in [
                ("class", "city"),
                ("id", shape.id.as_str()),
                ("d", shape.path.as_str()),
                ("data-city", shape.name.as_str()),
                ("data-region", shape.subdivision_id.as_str()),
                ("cursor", "pointer"),
            ] {
                dom(path.set_attribute(k, v))?;
            }
            dom(apply_style(&path, &shape.style))?;

            let on_click = {
                let weak = weak.clone();
                let id = shape.id.clone();
                listener(move |_e: Event| toggle_from_event(&weak, &id))
            };
            let on_enter = {
                let weak = weak.clone();
                let id = shape.id.clone();
                let el = path.clone();
                listener(move |_e: Event| {
                    if let Some(shared) = weak.upgrade() {
                        Shared::hover(&shared, &id, &el, true);
                    }
                })
            };
            let on_leave = {
                let weak = weak.clone();
                let id = shape.id.clone();
                let el = path.clone();
                listener(move |_e: Event| {
                    if let Some(shared) = weak.upgrade() {
                        Shared::hover(&shared, &id, &el, false);
                    }
                })
            };
            for (event, cb) in [("click", on_click), ("mouseenter", on_enter), ("mouseleave", on_leave)] {
                self.shape_listeners.push(Bound::attach(&path, event, cb)?);
            }

            let label = self.svg("text")?;
            for (k, v) in [
                ("class", "municipality-label"),
                ("text-anchor", "middle"),
                ("dominant-baseline", "middle"),
                ("font-size", scene.label_style.font_size.as_str()),
                ("font-weight", scene.label_style.font_weight.as_str()),
                ("fill", scene.label_style.color.as_str()),
                ("pointer-events", "none"),
            ] {
                dom(label.set_attribute(k, v))?;
            }
            dom(label.set_attribute("x", &shape.label.x.to_string()))?;
            dom(label.set_attribute("y", &shape.label.y.to_string()))?;
            label.set_text_content(Some(&shape.label.text));

            let title = self.svg("title")?;
            title.set_text_content(Some(&shape.name));

            dom(group.append_child(&path))?;
            dom(group.append_child(&label))?;
            dom(group.append_child(&title))?;
            dom(svg.append_child(&group))?;
            self.shapes.insert(shape.id.clone(), path);
        }
        Ok(())
    }

    fn draw_legend(&self, legend: &Legend) -> Result<(), JsValue> {
        let Some(container) = self.by_id(&self.ids.legend) else { return Ok(()) };
        container.set_text_content(None);

        let title = self.html("h3")?;
        title.set_class_name("legend-title");
        title.set_text_content(Some(&legend.title));
        dom(container.append_child(&title))?;

        let items = self.html("div")?;
        items.set_class_name("legend-items");
        for entry in &legend.entries {
            let item = self.html("div")?;
            item.set_class_name("legend-item");
            let swatch = self.html("div")?;
            swatch.set_class_name("legend-color");
            dom(swatch.set_attribute("style", &format!("background-color: {}", entry.color)))?;
            let name = self.html("span")?;
            name.set_class_name("legend-label");
            name.set_text_content(Some(&entry.name));
            dom(item.append_child(&swatch))?;
            dom(item.append_child(&name))?;
            dom(items.append_child(&item))?;
        }
        dom(container.append_child(&items))?;
        Ok(())
    }

    /// Full view refresh. Writing the same state twice yields the same DOM.
    pub fn sync(&self, state: &ViewState) -> Result<(), JsValue> {
        for (id, style) in &state.styles {
            if let Some(el) = self.shapes.get(id) {
                dom(apply_style(el, style))?;
            }
        }
        self.render_list(&state.rows)?;
        self.render_stats(&state.stats)
    }

    fn render_list(&self, rows: &[ListRow]) -> Result<(), JsValue> {
        let Some(container) = self.by_id(&self.ids.list) else { return Ok(()) };
        container.set_text_content(None);
        for row in rows {
            let item = self.html("div")?;
            item.set_class_name(&row.class_name());
            dom(item.set_attribute("data-id", &row.id))?;
            let checkbox = self.html("div")?;
            checkbox.set_class_name("city-checkbox");
            let name = self.html("span")?;
            name.set_text_content(Some(&row.name));
            dom(item.append_child(&checkbox))?;
            dom(item.append_child(&name))?;
            dom(container.append_child(&item))?;
        }
        Ok(())
    }

    fn render_stats(&self, stats: &Stats) -> Result<(), JsValue> {
        let pct = stats.percent_text();
        for (id, text) in [
            (&self.ids.visited_count, stats.visited.to_string()),
            (&self.ids.total_count, stats.total.to_string()),
            (&self.ids.completion_rate, pct.clone()),
        ] {
            if let Some(el) = self.by_id(id) {
                el.set_text_content(Some(&text));
            }
        }
        if let Some(bar) = self.by_id(&self.ids.progress_bar) {
            if let Ok(bar) = bar.dyn_into::<HtmlElement>() {
                dom(bar.style().set_property("width", &pct))?;
            }
        }
        Ok(())
    }

    fn panel_grid(&self) -> Option<Element> {
        self.document.query_selector(&self.ids.panel_grid_selector).ok().flatten()
    }

    pub fn set_panel(&self, open: bool) -> Result<(), JsValue> {
        if let Some(header) = self.by_id(&self.ids.panel_header) {
            dom(header.class_list().toggle_with_force(PANEL_HEADER_ACTIVE, open))?;
        }
        if let Some(grid) = self.panel_grid() {
            dom(grid.class_list().toggle_with_force(PANEL_GRID_SHOW, open))?;
        }
        Ok(())
    }

    /// List row clicks go through one delegated listener so rebuilding the
    /// list never drops a callback that is still running.
    fn wire_chrome(&mut self, weak: &Weak<RefCell<Shared>>) -> Result<(), JsValue> {
        self.chrome_listeners.clear();
        if let Some(container) = self.by_id(&self.ids.list) {
            let weak = weak.clone();
            let row_selector = format!(".{}", ROW_CLASS);
            let cb = listener(move |e: Event| {
                let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else { return };
                let Ok(Some(row)) = target.closest(&row_selector) else { return };
                if let Some(id) = row.get_attribute("data-id") {
                    toggle_from_event(&weak, &id);
                }
            });
            self.chrome_listeners.push(Bound::attach(&container, "click", cb)?);
        }
        if let (Some(header), Some(_)) = (self.by_id(&self.ids.panel_header), self.panel_grid()) {
            let weak = weak.clone();
            let cb = listener(move |e: Event| {
                e.stop_propagation();
                let Some(shared) = weak.upgrade() else { return };
                if let Err(err) = Shared::toggle_panel(&shared) {
                    log::error!("panel toggle failed: {}", describe(&err));
                }
            });
            self.chrome_listeners.push(Bound::attach(&header, "click", cb)?);
        }
        Ok(())
    }
}
