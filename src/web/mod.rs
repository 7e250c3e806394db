// web/ - Browser host
//
// Wires the simulation to the page: canvas, sliders, colour picker, image
// upload, fullscreen and the hide/restore gesture. Everything runs on the
// main thread; shared state is one `Rc<RefCell<App>>`.

mod dom;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, File, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

use crate::config::Config;
use crate::controls::{RestoreGesture, parse_slider};
use crate::error::Result;
use crate::sim::{Floater, World};
use crate::sprite::Sprite;
use surface::Surface;

type Shared = Rc<RefCell<App>>;

pub struct App {
    cfg: Config,
    document: Document,
    world: World,
    surface: Surface,
    gesture: RestoreGesture,
    controls: Option<HtmlElement>,
    upload: Option<HtmlInputElement>,
    // Bumped on every upload and clear; stale decodes compare against it
    upload_generation: u32,
    frame: Option<AnimationFrame>,
}

impl App {
    fn set_count(&mut self, count: u32) {
        self.world.set_count(count);
        dom::set_text(&self.document, &self.cfg.dom.count_label, &count.to_string());
    }

    fn set_speed(&mut self, speed: u32) {
        self.world.set_speed(speed);
        dom::set_text(&self.document, &self.cfg.dom.speed_label, &speed.to_string());
    }

    fn resize(&mut self, w: u32, h: u32) {
        self.surface.resize(w, h);
        self.world.resize(w, h);
        self.redraw();
    }

    /// Repaint the last frame without advancing the simulation.
    fn redraw(&self) {
        if let Err(err) = self.surface.draw(self.world.encoder()) {
            console::error!("draw failed:", err.to_string());
        }
    }

    fn begin_upload(&mut self) -> u32 {
        self.upload_generation = self.upload_generation.wrapping_add(1);
        self.upload_generation
    }

    fn finish_upload(&mut self, generation: u32, sprite: &Sprite) {
        if generation != self.upload_generation {
            console::debug!("stale image decode dropped");
            return;
        }
        match self.surface.set_sprite(&self.document, sprite) {
            Ok(()) => self.redraw(),
            Err(err) => console::debug!("image ignored:", err.to_string()),
        }
    }

    fn clear_image(&mut self) {
        self.begin_upload();
        self.surface.clear_sprite();
        if let Some(input) = &self.upload {
            input.set_value("");
        }
        self.redraw();
    }

    fn hide_controls(&self) {
        if let Some(panel) = &self.controls {
            if let Err(err) = dom::set_display(panel, "none") {
                console::warn!("hide controls failed:", err.to_string());
            }
        }
    }

    fn show_controls(&self) {
        if let Some(panel) = &self.controls {
            if let Err(err) = dom::set_display(panel, "flex") {
                console::warn!("restore controls failed:", err.to_string());
            }
        }
    }

    fn toggle_fullscreen(&self) {
        if let Err(err) = dom::toggle_fullscreen(&self.document) {
            console::log!("Error attempting full-screen:", err.to_string());
        }
    }
}

/// Handle returned to JS. Dropping it does not stop the page.
#[wasm_bindgen]
pub struct FloaterApp {
    app: Shared,
}

#[wasm_bindgen]
impl FloaterApp {
    pub fn hide_controls(&self) {
        self.app.borrow().hide_controls();
    }

    pub fn toggle_fullscreen(&self) {
        self.app.borrow().toggle_fullscreen();
    }

    pub fn redraw(&self) {
        self.app.borrow().redraw();
    }

    pub fn count(&self) -> u32 {
        self.app.borrow().world.count()
    }

    pub fn speed(&self) -> u32 {
        self.app.borrow().world.speed()
    }

    pub fn has_image(&self) -> bool {
        self.app.borrow().surface.has_sprite()
    }
}

impl FloaterApp {
    /// Snapshot of entity `i` as of the last event or frame.
    pub fn floater(&self, i: usize) -> Option<Floater> {
        self.app.borrow().world.floaters().get(i)
    }
}

/// Wire up the stock page.
#[wasm_bindgen]
pub fn run() -> Result<FloaterApp, JsValue> {
    Ok(launch(Config::default())?)
}

/// Wire up a page whose ids or tunables differ from the defaults.
#[wasm_bindgen]
pub fn run_with_config(json: &str) -> Result<FloaterApp, JsValue> {
    Ok(launch(Config::from_json(json)?)?)
}

pub fn launch(mut cfg: Config) -> Result<FloaterApp> {
    let window = dom::window()?;
    let document = dom::document()?;

    let canvas: HtmlCanvasElement = dom::element(&document, &cfg.dom.canvas, "canvas")?;
    let (w, h) = dom::window_size(&window)?;
    let surface = Surface::new(canvas, &cfg)?;
    surface.resize(w, h);

    if cfg.sim.seed.is_none() {
        cfg.sim.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u32);
    }
    let world = World::new(w, h, cfg.sim.clone());

    let controls = dom::optional::<HtmlElement>(&document, &cfg.dom.controls, "element");
    let upload = dom::optional::<HtmlInputElement>(&document, &cfg.dom.image_upload, "input");
    let gesture = RestoreGesture::new(cfg.ui.restore_clicks);

    let app = Rc::new(RefCell::new(App {
        cfg,
        document,
        world,
        surface,
        gesture,
        controls,
        upload,
        upload_generation: 0,
        frame: None,
    }));

    {
        let mut a = app.borrow_mut();
        let (count, speed) = (a.cfg.sim.default_count, a.cfg.sim.default_speed);
        a.set_count(count);
        a.set_speed(speed);
    }

    wire_resize(&app)?;
    wire_sliders(&app);
    wire_canvas(&app);
    wire_image(&app);
    wire_page(&app);
    schedule_frame(&app);

    {
        let a = app.borrow();
        console::log!(format!(
            "floaters: {} at speed {} on {}x{}",
            a.world.count(),
            a.world.speed(),
            a.world.width(),
            a.world.height()
        ));
    }

    Ok(FloaterApp { app })
}

// ============================================================================
// Frame loop
// ============================================================================

fn schedule_frame(app: &Shared) {
    let next = Rc::clone(app);
    let handle = request_animation_frame(move |_timestamp| on_frame(&next));
    app.borrow_mut().frame = Some(handle);
}

fn on_frame(app: &Shared) {
    {
        let mut a = app.borrow_mut();
        a.frame.take();
        a.world.tick();
        a.redraw();
    }
    schedule_frame(app);
}

// ============================================================================
// Listeners
// ============================================================================

fn wire_resize(app: &Shared) -> Result<()> {
    let window = dom::window()?;
    let app = Rc::clone(app);
    let win = window.clone();
    EventListener::new(&window, "resize", move |_| match dom::window_size(&win) {
        Ok((w, h)) => app.borrow_mut().resize(w, h),
        Err(err) => console::warn!("resize ignored:", err.to_string()),
    })
    .forget();
    Ok(())
}

fn wire_sliders(app: &Shared) {
    let (doc, ids, ui, count, speed) = {
        let a = app.borrow();
        (
            a.document.clone(),
            a.cfg.dom.clone(),
            a.cfg.ui.clone(),
            a.world.count(),
            a.world.speed(),
        )
    };

    if let Some(slider) = dom::optional::<HtmlInputElement>(&doc, &ids.count_slider, "input") {
        slider.set_min(&ui.count_min.to_string());
        slider.set_max(&ui.count_max.to_string());
        slider.set_value(&count.to_string());
        let app = Rc::clone(app);
        let input = slider.clone();
        EventListener::new(&slider, "input", move |_| match parse_slider(&input.value()) {
            Ok(n) => app.borrow_mut().set_count(n),
            Err(err) => console::debug!(err.to_string()),
        })
        .forget();
    }

    if let Some(slider) = dom::optional::<HtmlInputElement>(&doc, &ids.speed_slider, "input") {
        slider.set_min(&ui.speed_min.to_string());
        slider.set_max(&ui.speed_max.to_string());
        slider.set_value(&speed.to_string());
        let app = Rc::clone(app);
        let input = slider.clone();
        EventListener::new(&slider, "input", move |_| match parse_slider(&input.value()) {
            Ok(s) => app.borrow_mut().set_speed(s),
            Err(err) => console::debug!(err.to_string()),
        })
        .forget();
    }
}

fn wire_canvas(app: &Shared) {
    let canvas = app.borrow().surface.canvas().clone();
    let app = Rc::clone(app);
    EventListener::new(&canvas, "click", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else { return };
        let (x, y) = (mouse.client_x() as f32, mouse.client_y() as f32);
        app.borrow_mut().world.respawn_near(x, y);
    })
    .forget();
}

fn wire_image(app: &Shared) {
    let (doc, ids, upload) = {
        let a = app.borrow();
        (a.document.clone(), a.cfg.dom.clone(), a.upload.clone())
    };

    if let Some(input) = upload {
        let app = Rc::clone(app);
        let target = input.clone();
        EventListener::new(&input, "change", move |_| {
            let Some(file) = target.files().and_then(|files| files.get(0)) else {
                console::debug!("no image selected");
                return;
            };
            load_image(&app, file);
        })
        .forget();
    }

    if let Some(button) = dom::optional::<HtmlElement>(&doc, &ids.clear_image, "element") {
        let app = Rc::clone(app);
        EventListener::new(&button, "click", move |_| app.borrow_mut().clear_image()).forget();
    }
}

fn load_image(app: &Shared, file: File) {
    let (generation, edge) = {
        let mut a = app.borrow_mut();
        (a.begin_upload(), a.cfg.sim.size.round().max(1.0) as u32)
    };
    let app = Rc::clone(app);
    spawn_local(async move {
        let bytes = match JsFuture::from(file.array_buffer()).await {
            Ok(buf) => Uint8Array::new(&buf).to_vec(),
            Err(err) => {
                console::debug!("image read failed:", err);
                return;
            }
        };
        match Sprite::decode(&bytes, edge) {
            Ok(sprite) => app.borrow_mut().finish_upload(generation, &sprite),
            Err(err) => console::debug!("image ignored:", err.to_string()),
        }
    });
}

fn wire_page(app: &Shared) {
    let (doc, ids) = {
        let a = app.borrow();
        (a.document.clone(), a.cfg.dom.clone())
    };

    if let Some(picker) = dom::optional::<HtmlInputElement>(&doc, &ids.color_picker, "input") {
        let page = doc.clone();
        let input = picker.clone();
        EventListener::new(&picker, "input", move |_| {
            if let Err(err) = dom::set_background(&page, &input.value()) {
                console::warn!("background not applied:", err.to_string());
            }
        })
        .forget();
    }

    if let Some(button) = dom::optional::<HtmlElement>(&doc, &ids.fullscreen, "element") {
        let app = Rc::clone(app);
        EventListener::new(&button, "click", move |_| app.borrow().toggle_fullscreen()).forget();
    }

    if let Some(button) = doc.get_element_by_id(&ids.hide_controls) {
        let app = Rc::clone(app);
        EventListener::new(&button, "click", move |event| {
            // Keep this click out of the restore count
            event.stop_propagation();
            app.borrow().hide_controls();
        })
        .forget();
    }

    let app = Rc::clone(app);
    EventListener::new(&doc, "click", move |_| {
        let mut a = app.borrow_mut();
        if a.gesture.click() {
            a.show_controls();
        }
    })
    .forget();
}
