// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mounted overlay: model, panel, timer, and render hook wired together.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{OnceCell, RefCell};

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use shotclock_hud_core::action::OverlayAction;
use shotclock_hud_core::config::OverlayConfig;
use shotclock_hud_core::overlay::{Overlay, RenderSource};
use shotclock_hud_core::status::StatusLabel;
use shotclock_hud_core::time::HostTime;
use shotclock_hud_core::trace::{ActionEvent, MountEvent, RenderEvent, TraceSink, Tracer};

use crate::globals::PageGlobals;
use crate::interval::IntervalLoop;
use crate::presenter::DomOverlay;
use crate::{local_timestamp, now};

/// A mounted debug overlay.
///
/// Cloning yields another handle to the same overlay. The timer path and
/// [`refresh`](Self::refresh) share one render routine: read the page
/// globals, update the model, rewrite the panel, emit a trace event.
#[derive(Clone)]
pub struct OverlayWidget {
    state: Rc<RefCell<WidgetState>>,
    globals: PageGlobals,
}

struct WidgetState {
    overlay: Overlay,
    presenter: DomOverlay,
    sink: Box<dyn TraceSink>,
    interval: Option<IntervalLoop>,
}

impl core::fmt::Debug for OverlayWidget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut d = f.debug_struct("OverlayWidget");
        if let Ok(state) = self.state.try_borrow() {
            d.field("overlay", &state.overlay)
                .field("interval", &state.interval);
        }
        d.finish_non_exhaustive()
    }
}

impl OverlayWidget {
    /// Creates the overlay from the current page globals and attaches its
    /// panel to `document.body`. Nothing is rendered until
    /// [`start`](Self::start) or [`refresh`](Self::refresh).
    pub fn mount(
        config: OverlayConfig,
        globals: PageGlobals,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let overlay = Overlay::new(config, &globals.snapshot());

        let slot: Rc<OnceCell<Weak<RefCell<WidgetState>>>> = Rc::default();
        let presenter = {
            let slot = Rc::clone(&slot);
            let globals = globals.clone();
            DomOverlay::mount(&document, move |action| {
                on_click(action, &globals, slot.get());
            })?
        };

        let state = Rc::new(RefCell::new(WidgetState {
            overlay,
            presenter,
            sink,
            interval: None,
        }));
        let _ = slot.set(Rc::downgrade(&state));

        {
            let mut guard = state.borrow_mut();
            let WidgetState { overlay, sink, .. } = &mut *guard;
            Tracer::new(&mut **sink).mount(&MountEvent {
                at: now(),
                client_name: overlay.client_name(),
                refresh_interval: overlay.config().refresh_interval,
            });
        }

        Ok(Self { state, globals })
    }

    /// Renders immediately, then every
    /// [`refresh_interval`](OverlayConfig::refresh_interval) for as long as
    /// the widget lives. Calling it again is a no-op.
    pub fn start(&self) {
        if self.state.borrow().interval.is_some() {
            return;
        }
        render(&self.state, &self.globals, RenderSource::Initial, now());

        let period = self.state.borrow().overlay.config().refresh_interval;
        let weak = Rc::downgrade(&self.state);
        let globals = self.globals.clone();
        let interval = IntervalLoop::new(period, move |at| {
            if let Some(state) = weak.upgrade() {
                render(&state, &globals, RenderSource::Timer, at);
            }
        });
        interval.start();
        self.state.borrow_mut().interval = Some(interval);
    }

    /// Renders now, outside the timer.
    pub fn refresh(&self) {
        render(&self.state, &self.globals, RenderSource::Manual, now());
    }

    /// Publishes a zero-argument function on the page under the configured
    /// [`render_hook`](crate::GlobalNames::render_hook) name; calling it is
    /// the same as [`refresh`](Self::refresh).
    pub fn expose_render_hook(&self) -> Result<(), JsValue> {
        let weak = Rc::downgrade(&self.state);
        let globals = self.globals.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(state) = weak.upgrade() {
                render(&state, &globals, RenderSource::Manual, now());
            }
        }) as Box<dyn FnMut()>);
        // The page owns the hook from here on; it outlives this widget and
        // becomes a no-op once the widget is gone.
        self.globals
            .set(self.globals.names().render_hook, &closure.into_js_value())
    }

    /// The last rendered status label.
    #[must_use]
    pub fn status(&self) -> StatusLabel {
        self.state.borrow().overlay.status().clone()
    }

    /// Number of renders so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.state.borrow().overlay.render_count()
    }

    /// The overlay panel element.
    #[must_use]
    pub fn panel(&self) -> web_sys::HtmlElement {
        self.state.borrow().presenter.panel().clone()
    }
}

/// The single render routine behind the timer, the render hook, and
/// [`OverlayWidget::refresh`].
///
/// Page globals are read before the state is borrowed. A render requested
/// while another is in progress is dropped. `at` is the host time the render
/// is attributed to; timer renders pass the tick time.
fn render(state: &RefCell<WidgetState>, globals: &PageGlobals, source: RenderSource, at: HostTime) {
    let ambient = globals.snapshot();
    let timestamp = local_timestamp();
    let Ok(mut guard) = state.try_borrow_mut() else {
        return;
    };
    let WidgetState {
        overlay,
        presenter,
        sink,
        ..
    } = &mut *guard;

    let previous = overlay.status().clone();
    let view = overlay.render(&ambient, timestamp);
    presenter.present(&view);

    let status_changed = view.status != previous || source == RenderSource::Initial;
    Tracer::new(&mut **sink).render(&RenderEvent::new(
        &view,
        overlay.render_count(),
        source,
        at,
        status_changed,
    ));
}

/// Runs a button's action. Page callbacks run with no widget borrow held, so
/// they may call the render hook synchronously.
fn on_click(action: OverlayAction, globals: &PageGlobals, state: Option<&Weak<RefCell<WidgetState>>>) {
    let mut hooks = globals.clone();
    let outcome = action.perform(&mut hooks);

    let Some(state) = state.and_then(Weak::upgrade) else {
        return;
    };
    if let Ok(mut guard) = state.try_borrow_mut() {
        Tracer::new(&mut *guard.sink).action(&ActionEvent {
            action,
            at: now(),
            outcome,
        });
    }
}
