// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted overlay run that exercises the model and the diagnostics
//! pipeline without a browser.
//!
//! A simulated page walks through a connection lifecycle (never connected,
//! connecting, connected with clocks, counts withdrawn, user disconnect,
//! error, user reconnect). Each simulated second renders the overlay as the
//! browser timer would, printing the panel text. Events go to both a
//! [`PrettyPrintSink`](shotclock_hud_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](shotclock_hud_debug::recorder::RecorderSink); the
//! recording is exported as Chrome trace JSON (default `hud_trace.json`, or
//! the first command-line argument).

use std::fs::File;
use std::io::BufWriter;

use shotclock_hud_core::action::OverlayAction;
use shotclock_hud_core::ambient::{AmbientState, ConnectionHooks};
use shotclock_hud_core::config::OverlayConfig;
use shotclock_hud_core::overlay::{Overlay, RenderSource};
use shotclock_hud_core::time::{Duration, HostTime};
use shotclock_hud_core::trace::{
    ActionEvent, MountEvent, RenderEvent, TraceSink, Tracer,
};
use shotclock_hud_debug::pretty::PrettyPrintSink;
use shotclock_hud_debug::recorder::RecorderSink;

/// Stand-in for the hosting page: its globals and its connection callbacks.
#[derive(Debug, Default)]
struct SimPage {
    ambient: AmbientState,
    socket_open: bool,
}

impl ConnectionHooks for SimPage {
    fn close_socket(&mut self) -> bool {
        if !self.socket_open {
            return false;
        }
        self.socket_open = false;
        self.ambient.ws_connected = Some(false);
        true
    }

    fn connect(&mut self) -> bool {
        self.socket_open = true;
        self.ambient.ws_status = None;
        self.ambient.ws_connected = Some(true);
        true
    }

    fn manual_disconnect(&mut self) -> bool {
        self.close_socket();
        true
    }
}

/// Forwards every event to two sinks.
struct Tee<'a> {
    first: &'a mut dyn TraceSink,
    second: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_mount(&mut self, e: &MountEvent<'_>) {
        self.first.on_mount(e);
        self.second.on_mount(e);
    }

    fn on_render(&mut self, e: &RenderEvent<'_>) {
        self.first.on_render(e);
        self.second.on_render(e);
    }

    fn on_action(&mut self, e: &ActionEvent) {
        self.first.on_action(e);
        self.second.on_action(e);
    }
}

/// What happens on the page just before a given simulated second's render.
enum Step {
    Nothing,
    Page(fn(&mut SimPage)),
    Click(OverlayAction),
    /// Page logic changes state and immediately calls the render hook.
    PageThenRefresh(fn(&mut SimPage)),
}

const SCRIPT: &[Step] = &[
    Step::Nothing,
    Step::Page(|p| p.ambient.ws_status = Some("connecting".into())),
    Step::Page(|p| {
        p.socket_open = true;
        p.ambient.ws_connected = Some(true);
        p.ambient.active_clocks = Some(3);
        p.ambient.running_clocks = Some(1);
    }),
    Step::PageThenRefresh(|p| p.ambient.running_clocks = Some(2)),
    Step::Page(|p| {
        p.ambient.active_clocks = None;
        p.ambient.running_clocks = None;
    }),
    Step::Click(OverlayAction::Disconnect),
    Step::Page(|p| {
        p.ambient.ws_connected = None;
        p.ambient.ws_status = Some("error".into());
    }),
    Step::Click(OverlayAction::Reconnect),
    Step::Nothing,
];

struct Sim<'a> {
    overlay: Overlay,
    page: SimPage,
    tracer: Tracer<'a>,
    now: HostTime,
}

impl Sim<'_> {
    fn render(&mut self, source: RenderSource) {
        let previous = self.overlay.status().clone();
        let timestamp = format!("T+{}s", self.now.micros() / 1_000_000);
        let view = self.overlay.render(&self.page.ambient, timestamp);
        let changed = view.status != previous || source == RenderSource::Initial;
        self.tracer.render(&RenderEvent::new(
            &view,
            self.overlay.render_count(),
            source,
            self.now,
            changed,
        ));
        println!("{view}\n");
    }

    fn click(&mut self, action: OverlayAction) {
        if self.overlay.status().offered_action() != Some(action) {
            println!("({} is not on screen; ignoring click)\n", action.caption());
            return;
        }
        let outcome = action.perform(&mut self.page);
        self.tracer.action(&ActionEvent {
            action,
            at: self.now,
            outcome,
        });
    }
}

fn main() -> std::io::Result<()> {
    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hud_trace.json".to_owned());

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stderr()));
    let mut recorder = RecorderSink::new();

    {
        let mut tee = Tee {
            first: &mut pretty,
            second: &mut recorder,
        };

        // -- mount ---------------------------------------------------------
        let config = OverlayConfig::standard();
        let page = SimPage {
            ambient: AmbientState::new().with_client_name("sim-scorer"),
            socket_open: false,
        };
        let overlay = Overlay::new(config, &page.ambient);
        let mut sim = Sim {
            overlay,
            page,
            tracer: Tracer::new(&mut tee),
            now: HostTime(0),
        };
        let client_name = sim.overlay.client_name().to_owned();
        sim.tracer.mount(&MountEvent {
            at: sim.now,
            client_name: &client_name,
            refresh_interval: config.refresh_interval,
        });
        sim.render(RenderSource::Initial);

        // -- simulated seconds ---------------------------------------------
        for step in SCRIPT {
            match step {
                Step::Nothing => {}
                Step::Page(f) => f(&mut sim.page),
                Step::Click(action) => sim.click(*action),
                Step::PageThenRefresh(f) => {
                    f(&mut sim.page);
                    sim.now = sim.now + Duration::from_millis(250);
                    sim.render(RenderSource::Manual);
                }
            }
            sim.now = HostTime(
                (sim.now.micros() / config.refresh_interval.micros() + 1)
                    * config.refresh_interval.micros(),
            );
            sim.render(RenderSource::Timer);
        }
    }

    let file = File::create(&out_path)?;
    let mut writer = BufWriter::new(file);
    shotclock_hud_debug::chrome::export(recorder.events(), &mut writer)?;
    eprintln!(
        "wrote {} events ({} renders) to {out_path}",
        recorder.events().len(),
        recorder.render_count(),
    );
    Ok(())
}
