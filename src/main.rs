//! Folio Canvas entry point
//!
//! On the web: wires the particle background, the radar chart, the skill
//! bars and the statistic counters to the page. Natively: runs the particle field
//! headless and logs what each frame would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    use folio_canvas::chart::{
        CounterTween, REVEAL_THRESHOLD, RadarChart, Reveal, SkillBar, default_skills,
    };
    use folio_canvas::consts::{COUNTER_TICK_MS, RADAR_CANVAS_SIZE};
    use folio_canvas::renderer::{CanvasSurface, FieldStyle, render_field};
    use folio_canvas::{ParticleField, Settings};

    const PARTICLE_CANVAS_ID: &str = "particles-canvas";
    const RADAR_CANVAS_ID: &str = "skills-radar";
    const COUNTER_SELECTOR: &str = ".stat-number, .metric-value";
    const SKILL_BAR_SELECTOR: &str = ".skill-progress";
    /// Counters start a little before they reach the bottom edge
    const COUNTER_ROOT_MARGIN: &str = "0px 0px -100px 0px";

    /// Particle background bound to the full-viewport canvas
    struct Background {
        field: ParticleField,
        surface: CanvasSurface,
        style: FieldStyle,
        animate: bool,
    }

    impl Background {
        fn frame(&mut self) {
            if self.animate {
                self.field.step();
            }
            render_field(&self.field, &self.style, &mut self.surface);
        }

        fn fit_to_window(&mut self) {
            let (w, h) = window_size();
            self.surface.set_size(w, h);
            self.field.resize(w as f32, h as f32);
        }
    }

    fn window_size() -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let dim = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    /// Settings from the particle canvas `data-settings` attribute, if any
    fn load_settings() -> Settings {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PARTICLE_CANVAS_ID))
            .and_then(|el| el.get_attribute("data-settings"));

        match json {
            Some(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings (quality {})", settings.quality.as_str());
                    settings
                }
                Err(e) => {
                    log::warn!("{}; using default settings", e);
                    Settings::default()
                }
            },
            None => Settings::default(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {}", e).into());
        }

        let settings = load_settings();
        init_background(&settings);
        init_radar(&settings);
        init_skill_bars();
        init_counters();
    }

    fn init_background(settings: &Settings) {
        let Some(surface) = CanvasSurface::from_element_id(PARTICLE_CANVAS_ID) else {
            log::debug!("No #{} on this page", PARTICLE_CANVAS_ID);
            return;
        };

        let (w, h) = window_size();
        surface.set_size(w, h);

        let seed = js_sys::Date::now() as u64;
        let field = match ParticleField::new(w as f32, h as f32, settings.particle_config(), seed) {
            Ok(field) => field,
            Err(e) => {
                log::error!("Particle field not started: {}", e);
                return;
            }
        };
        log::info!("Particle field started: {} particles, seed {}", field.len(), seed);

        let background = Rc::new(RefCell::new(Background {
            field,
            surface,
            style: settings.field_style,
            animate: settings.animate(),
        }));

        {
            let background = background.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                background.borrow_mut().fit_to_window();
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        request_animation_frame(background);
    }

    fn request_animation_frame(background: Rc<RefCell<Background>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            background.borrow_mut().frame();
            request_animation_frame(background);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Observe `element` and call `on_visible` for each intersecting entry
    fn observe<F>(element: &Element, root_margin: Option<&str>, mut on_visible: F)
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target(), &observer);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }

        match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer.observe(element),
            Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
        }
        closure.forget();
    }

    fn init_radar(settings: &Settings) {
        let Some(surface) = CanvasSurface::from_element_id(RADAR_CANVAS_ID) else {
            log::debug!("No #{} on this page", RADAR_CANVAS_ID);
            return;
        };
        let size = RADAR_CANVAS_SIZE as u32;
        surface.set_size(size, size);

        let element: Element = surface.canvas().clone().into();
        let mut chart = RadarChart::new(default_skills(), settings.radar.clone());
        let mut surface = surface;

        observe(&element, None, move |target, observer| {
            if chart.on_visibility(true, Some(&mut surface)) {
                observer.unobserve(target);
            }
        });
    }

    /// Every element matching `selector`
    fn select_all(selector: &str) -> Vec<Element> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i)?.dyn_into::<Element>().ok())
            .collect()
    }

    fn init_skill_bars() {
        for element in select_all(SKILL_BAR_SELECTOR) {
            let mut reveal = Reveal::default();
            observe(&element, None, move |target, observer| {
                if reveal.trigger(true) {
                    observer.unobserve(target);
                    fill_skill_bar(target);
                }
            });
        }
    }

    fn fill_skill_bar(element: &Element) {
        let Some(bar) = element
            .get_attribute("data-width")
            .and_then(|attr| SkillBar::parse(&attr))
        else {
            log::debug!("Skill bar without a usable data-width");
            return;
        };
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(e) = element.style().set_property("width", &bar.width()) {
            log::warn!("Skill bar width not set: {:?}", e);
        }
    }

    fn init_counters() {
        for element in select_all(COUNTER_SELECTOR) {
            let mut reveal = Reveal::default();
            observe(&element, Some(COUNTER_ROOT_MARGIN), move |target, observer| {
                if reveal.trigger(true) {
                    observer.unobserve(target);
                    start_counter(target.clone());
                }
            });
        }
    }

    fn start_counter(element: Element) {
        let Some(mut counter) = element
            .get_attribute("data-target")
            .and_then(|attr| CounterTween::parse(&attr))
        else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let handle = Rc::new(Cell::new(0));
        let closure = {
            let handle = handle.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                let running = counter.tick();
                element.set_text_content(Some(&counter.display()));
                if !running {
                    window.clear_interval_with_handle(handle.get());
                }
            })
        };

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTER_TICK_MS as i32,
        ) {
            Ok(id) => handle.set(id),
            Err(e) => log::warn!("Counter timer failed: {:?}", e),
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use folio_canvas::chart::RadarChart;
    use folio_canvas::renderer::{RecordingSurface, render_field};
    use folio_canvas::{ParticleField, Settings};

    env_logger::init();
    log::info!("Folio Canvas (native) starting...");

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(600);

    let settings = Settings::default();
    let (width, height) = (1280.0, 720.0);
    let mut field = match ParticleField::new(width, height, settings.particle_config(), 12345) {
        Ok(field) => field,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut surface = RecordingSurface::new(width, height);

    let mut reflections = 0;
    let mut links = 0;
    for frame in 0..frames {
        if frame == frames / 2 {
            // Shrink mid-run like a window resize
            surface.set_size(800.0, 600.0);
            field.resize(800.0, 600.0);
        }
        reflections += field.step();
        links += render_field(&field, &settings.field_style, &mut surface);
    }

    println!(
        "{} particles, {} frames: {} reflections, {:.1} links/frame",
        field.len(),
        field.frame(),
        reflections,
        links as f64 / frames.max(1) as f64
    );

    let mut chart = RadarChart::default();
    let mut radar = RecordingSurface::new(400.0, 400.0);
    if chart.on_visibility(true, Some(&mut radar)) {
        for (sample, vertex) in chart.samples().iter().zip(chart.layout().vertices) {
            println!("{:>22}: ({:.1}, {:.1})", sample.name, vertex.x, vertex.y);
        }
        println!("Radar chart: {} draw calls", radar.commands().len());
    }
}
