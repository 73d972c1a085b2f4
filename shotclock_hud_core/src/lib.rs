// Copyright 2026 the Shotclock HUD Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data model for the shot-clock debug overlay.
//!
//! `shotclock_hud_core` holds everything about the overlay that does not
//! touch a browser: the injected ambient state, status derivation, the
//! retained-value render model, the rendered view and the action contract.
//! It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   Host (timer tick / manual refresh)
//!       │
//!       ▼
//!   AmbientState ──► Overlay::render() ──► OverlayView ──► presenter
//!                                                              │
//!                 ┌────────────────────────────────────────────┘
//!                 ▼
//!   OverlayAction::perform() ──► ConnectionHooks
//! ```
//!
//! **[`ambient`]** — [`AmbientState`](ambient::AmbientState), the explicit
//! snapshot of host-owned values, and the
//! [`ConnectionHooks`](ambient::ConnectionHooks) trait for the optional
//! reconnect/disconnect callbacks.
//!
//! **[`status`]** — [`StatusLabel`](status::StatusLabel) derivation from the
//! boolean flag or the string status.
//!
//! **[`overlay`]** — [`Overlay`](overlay::Overlay), the component-owned
//! retained fields and the single render routine.
//!
//! **[`view`]** — [`OverlayView`](view::OverlayView) and the panel style.
//!
//! **[`action`]** — Reconnect/Disconnect buttons and what activating them
//! does.
//!
//! **[`config`]** — [`OverlayConfig`](config::OverlayConfig) fallbacks and
//! refresh interval.
//!
//! **[`time`]** — Microsecond host time and durations.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types with
//! the zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod action;
pub mod ambient;
pub mod config;
pub mod overlay;
pub mod status;
pub mod time;
pub mod trace;
pub mod view;
