//! requestAnimationFrame plumbing around the game engine.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{FrameScheduler, GameEngine, TickOutcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::canvas::CanvasSurface;
use crate::overlay::DomOverlay;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules the shared frame callback on the next display refresh
pub struct RafScheduler {
    window: Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> bool {
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            tracing::error!("frame requested before the loop was installed");
            return false;
        };
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = ?e, "requestAnimationFrame failed");
                false
            }
        }
    }
}

/// Everything one running page needs
pub struct App {
    pub engine: GameEngine,
    surface: CanvasSurface,
    overlay: DomOverlay,
    scheduler: RafScheduler,
}

impl App {
    /// Wire the engine to the page and request the first frame.
    ///
    /// The frame closure and the app reference each other, so both live as
    /// long as the page does.
    pub fn launch(
        window: Window,
        engine: GameEngine,
        surface: CanvasSurface,
        overlay: DomOverlay,
    ) -> Rc<RefCell<App>> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let app = Rc::new(RefCell::new(App {
            engine,
            surface,
            overlay,
            scheduler: RafScheduler {
                window,
                callback: callback.clone(),
            },
        }));

        let app_for_frame = app.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            app_for_frame.borrow_mut().tick();
        }) as Box<dyn FnMut()>));

        app.borrow_mut().start();
        app
    }

    fn start(&mut self) {
        self.engine.start(&mut self.scheduler);
    }

    pub fn tick(&mut self) -> TickOutcome {
        let App {
            engine,
            surface,
            overlay,
            scheduler,
        } = self;
        engine.tick(surface, overlay, scheduler)
    }

    pub fn restart(&mut self) {
        let App {
            engine,
            overlay,
            scheduler,
            ..
        } = self;
        engine.reset(overlay, scheduler);
    }
}
