// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads events from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use shotclock_hud_core::action::OverlayAction;
use shotclock_hud_core::overlay::RenderSource;

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
/// Renders and actions become instant events; a mount becomes a
/// `process_name` metadata event carrying the client name.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::with_capacity(events.len());

    for event in events {
        match event {
            RecordedEvent::Mount {
                at,
                client_name,
                refresh_interval,
            } => {
                out.push(json!({
                    "ph": "M",
                    "name": "process_name",
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                    "args": {
                        "name": format!("overlay: {client_name}"),
                        "refresh_interval_ms": refresh_interval.as_millis(),
                    }
                }));
            }
            RecordedEvent::Render {
                render_index,
                source,
                at,
                status,
                status_changed,
                active_clocks,
                running_clocks,
                action,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": "Render",
                    "cat": source_category(*source),
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "render_index": render_index,
                        "status": status,
                        "status_changed": status_changed,
                        "active_clocks": active_clocks,
                        "running_clocks": running_clocks,
                        "button": action.map(OverlayAction::caption),
                    }
                }));
            }
            RecordedEvent::Action {
                action,
                at,
                outcome,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": action.caption(),
                    "cat": "Action",
                    "ts": at.micros(),
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "socket_closed": outcome.socket_closed,
                        "connect_called": outcome.connect_called,
                        "disconnect_called": outcome.disconnect_called,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

fn source_category(source: RenderSource) -> &'static str {
    match source {
        RenderSource::Initial => "Initial",
        RenderSource::Timer => "Timer",
        RenderSource::Manual => "Manual",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use shotclock_hud_core::action::ActionOutcome;
    use shotclock_hud_core::time::{Duration, HostTime};
    use shotclock_hud_core::trace::{ActionEvent, MountEvent, RenderEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_mount(&MountEvent {
            at: HostTime(0),
            client_name: "bench",
            refresh_interval: Duration::from_secs(1),
        });
        rec.on_render(&RenderEvent {
            render_index: 1,
            source: RenderSource::Initial,
            at: HostTime(1_000),
            status: "Connected",
            status_changed: true,
            active_clocks: 2,
            running_clocks: 1,
            action: Some(OverlayAction::Disconnect),
        });
        rec.on_action(&ActionEvent {
            action: OverlayAction::Disconnect,
            at: HostTime(2_000),
            outcome: ActionOutcome {
                disconnect_called: true,
                ..ActionOutcome::default()
            },
        });

        let mut out = Vec::new();
        export(rec.events(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["ph"], "M");
        assert_eq!(parsed[0]["args"]["name"], "overlay: bench");

        assert_eq!(parsed[1]["ph"], "i");
        assert_eq!(parsed[1]["cat"], "Initial");
        assert_eq!(parsed[1]["args"]["status"], "Connected");
        assert_eq!(parsed[1]["args"]["button"], "Disconnect");

        assert_eq!(parsed[2]["name"], "Disconnect");
        assert_eq!(parsed[2]["args"]["disconnect_called"], true);
    }

    #[test]
    fn render_without_button_exports_null() {
        let events = [RecordedEvent::Render {
            render_index: 1,
            source: RenderSource::Timer,
            at: HostTime(0),
            status: "Connecting".to_owned(),
            status_changed: false,
            active_clocks: 1,
            running_clocks: 0,
            action: None,
        }];
        let mut out = Vec::new();
        export(&events, &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        assert!(parsed[0]["args"]["button"].is_null());
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
