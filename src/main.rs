//! Zellij plugin wrapper and entry point.
//!
//! Thin layer between the Rosterview library and the Zellij host: it turns
//! host events into library [`Event`]s, runs the returned [`Action`]s through
//! host commands and draws the current state.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling, web requests
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  RosterWorker    │   │  ← Payload decoding
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`, request
//!    `WebAccess`, subscribe to events
//! 2. **Permission granted**: mount the view (fetches the user list)
//! 3. **Visible(true)**: mount a view if none is mounted, e.g. after `q`.
//!    Hiding the pane or switching tabs keeps the current view
//! 4. **Update**: map events, delegate to the library, execute actions
//! 5. **Render**: draw and keep the hit map for mouse clicks
//!
//! # Keybindings
//!
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `Enter`: View the highlighted user
//! - `h`/`Left`/`<`: Previous page
//! - `l`/`Right`/`>`: Next page
//! - `r`: Reload
//! - `q`/`Esc`: Close plugin
//!
//! Clicking a row selects it, clicking a pager button changes page, and the
//! mouse wheel scrolls the content.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use rosterview::app::RequestContext;
use rosterview::ui::{HitMap, HitTarget};
use rosterview::worker::{RosterWorker, WorkerMessage, WorkerResponse};
use rosterview::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(RosterWorker, rosterview_worker, ROSTERVIEW_WORKER);

/// Lines moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: rosterview::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Set once the host grants `WebAccess`; no request is issued before that.
    web_access: bool,

    /// Clickable regions of the last render.
    hit_map: HitMap,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: rosterview::initialize(&Config::default()),
            worker_name: "rosterview".to_string(),
            web_access: false,
            hit_map: HitMap::default(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        rosterview::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = ?config.endpoint, theme = ?config.theme_name, "parsed configuration");
        self.app = rosterview::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::Visible,
            EventType::WebRequestResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Maps the host event, runs it through the library and executes the
    /// resulting actions. Returns whether the pane should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => Self::map_key_event(key),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::Timer(_) => Some(Event::ScrollTick),
            zellij_tile::prelude::Event::Visible(visible) => self.map_visibility(visible),
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_result(status, body, &context)
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                self.map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.map_permission_result(status)
            }
            _ => None,
        };

        let Some(our_event) = our_event else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        self.hit_map = rosterview::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(_) => "Mouse".to_string(),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::Visible(visible) => format!("Visible({visible})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::CursorDown),
                BareKey::Char('p') => Some(Event::CursorUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Enter => Event::SelectHighlighted,
            BareKey::Left | BareKey::Char('h' | '<') => Event::PreviousPage,
            BareKey::Right | BareKey::Char('l' | '>') => Event::NextPage,
            BareKey::Char('r') => Event::Reload,
            BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()?;
                let target = self.hit_map.target_at(row, col)?;
                tracing::debug!(row, col, target = ?target, "click");
                Some(match target {
                    HitTarget::Row(offset) => Event::SelectRow(offset),
                    HitTarget::PreviousPage => Event::PreviousPage,
                    HitTarget::NextPage => Event::NextPage,
                })
            }
            Mouse::ScrollUp(_) => Some(Event::ScrollBy(-WHEEL_STEP)),
            Mouse::ScrollDown(_) => Some(Event::ScrollBy(WHEEL_STEP)),
            _ => None,
        }
    }

    /// Only showing the pane matters: `Mount` is a no-op for a mounted view.
    fn map_visibility(&self, visible: bool) -> Option<Event> {
        // No request may go out before WebAccess is granted.
        (visible && self.web_access).then_some(Event::Mount)
    }

    fn map_permission_result(&mut self, status: PermissionStatus) -> Option<Event> {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted - mounting view");
                self.web_access = true;
                Some(Event::Mount)
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied");
                Some(Event::PermissionDenied)
            }
        }
    }

    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(request) = RequestContext::from_context(context) else {
            tracing::debug!("ignoring web result without a rosterview context");
            return None;
        };

        Some(match request {
            RequestContext::Users { generation } => {
                tracing::debug!(generation, status, bytes = body.len(), "user list response");
                Event::UsersFetched {
                    generation,
                    status,
                    body,
                }
            }
            RequestContext::Avatar { generation, url } => Event::AvatarProbed {
                generation,
                url,
                status,
            },
        })
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` as JSON and posts it to the worker thread.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Translates a library action into host calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::FetchUsers { url, context } | Action::ProbeAvatar { url, context } => {
                web_request(url, HttpVerb::Get, BTreeMap::new(), Vec::new(), context.to_context());
            }
            Action::PostToWorker(message) => self.post_worker_message(message),
            Action::ScheduleScrollTick { seconds } => set_timeout(*seconds),
        }
    }
}
