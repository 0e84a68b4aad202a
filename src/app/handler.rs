//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input, host
//! events and worker responses, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Request lifecycle
//!
//! `Mount` starts a generation and emits the user-list fetch. The response body
//! goes to the worker for decoding and comes back as a `WorkerResponse`. Each
//! step checks that its generation is still mounted, so results that arrive
//! after `Unmount`, `Reload` or `CloseFocus` never reach the state.
//!
//! # Example
//!
//! ```rust
//! use rosterview::app::{handle_event, Action, AppState, Event};
//! use rosterview::ui::theme::Theme;
//!
//! let mut state = AppState::new(Some("https://api.example.com/users".into()), Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(actions[0], Action::FetchUsers { .. }));
//! # Ok::<(), rosterview::RosterError>(())
//! ```

use super::modes::LoadPhase;
use super::requests::{parse_endpoint, RequestContext};
use super::state::SCROLL_TICK_SECONDS;
use crate::app::{Action, AppState};
use crate::domain::error::{Result, RosterError};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host callbacks or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The view became visible. Starts a view instance unless one is mounted.
    Mount,
    /// The view went away. Outstanding results for it are discarded.
    Unmount,
    /// Discards the current instance and mounts a fresh one.
    Reload,
    /// Unmounts and hides the plugin pane.
    CloseFocus,
    /// The host refused web access.
    PermissionDenied,

    /// The user-list request finished.
    UsersFetched {
        generation: u64,
        status: u16,
        body: Vec<u8>,
    },

    /// An avatar probe finished. Status `0` stands for a transport failure.
    AvatarProbed {
        generation: u64,
        url: String,
        status: u16,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Moves the row cursor down (wraps to the top of the page).
    CursorDown,
    /// Moves the row cursor up (wraps to the bottom of the page).
    CursorUp,
    PreviousPage,
    NextPage,
    /// Selects the row under the cursor.
    SelectHighlighted,
    /// Selects a row of the current page by position, e.g. from a click.
    SelectRow(usize),

    /// Advances the scroll animation one step.
    ScrollTick,
    /// Scrolls the content by a number of lines, negative is up.
    ScrollBy(isize),
}

const fn is_success(status: u16) -> bool {
    matches!(status, 200..=299)
}

/// Whether list interactions apply: mounted and showing records.
fn is_interactive(state: &AppState) -> bool {
    state.lifetime.is_mounted() && state.phase == LoadPhase::Ready
}

/// Whether a fetch result for `generation` may still change the state.
fn accepts_fetch_result(state: &AppState, generation: u64) -> bool {
    state.lifetime.is_current(generation) && state.phase.is_loading()
}

fn mount(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.lifetime.is_mounted() {
        return (false, vec![]);
    }

    let generation = state.lifetime.mount();
    state.reset_view();

    let endpoint = state.endpoint.clone().unwrap_or_default();
    match parse_endpoint(&endpoint) {
        Ok(_) => {
            tracing::debug!(generation, endpoint = %endpoint.trim(), "fetching user list");
            (
                true,
                vec![Action::FetchUsers {
                    url: endpoint.trim().to_string(),
                    context: RequestContext::Users { generation },
                }],
            )
        }
        Err(e) => {
            state.fail(&e);
            (true, vec![])
        }
    }
}

/// Probe actions for avatars that just became visible.
fn avatar_probes(state: &mut AppState) -> Vec<Action> {
    let generation = state.lifetime.generation();
    state
        .claim_visible_avatars()
        .into_iter()
        .map(|url| Action::ProbeAvatar {
            context: RequestContext::Avatar {
                generation,
                url: url.clone(),
            },
            url,
        })
        .collect()
}

/// Runs after a selection commits: requests its avatar and scrolls the
/// detail panel into view.
fn reveal_selection(state: &mut AppState) -> Vec<Action> {
    let mut actions = avatar_probes(state);
    if state.scroll_detail_into_view() {
        actions.push(Action::ScheduleScrollTick {
            seconds: SCROLL_TICK_SECONDS,
        });
    }
    actions
}

fn after_page_change(state: &mut AppState) -> Vec<Action> {
    let mut actions = avatar_probes(state);
    if state.scroll_list_into_view() {
        actions.push(Action::ScheduleScrollTick {
            seconds: SCROLL_TICK_SECONDS,
        });
    }
    actions
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::UsersDecoded { generation, users } => {
            if !accepts_fetch_result(state, *generation) {
                tracing::debug!(generation, "discarding stale decoded users");
                return (false, vec![]);
            }
            state.decoding = None;
            state.load_records(users.clone());
            (true, avatar_probes(state))
        }
        WorkerResponse::DecodeFailed { generation, message } => {
            if !accepts_fetch_result(state, *generation) {
                return (false, vec![]);
            }
            state.decoding = None;
            state.fail(&RosterError::Decode(message.clone()));
            (true, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::error!("Worker error: {}", message);
            // The error carries no generation; blame it on the current
            // instance only while that instance's payload is with the worker.
            let generation = state.lifetime.generation();
            if state.decoding != Some(generation) || !accepts_fetch_result(state, generation) {
                return (false, vec![]);
            }
            state.decoding = None;
            state.fail(&RosterError::Worker(message.clone()));
            (true, vec![])
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the runtime whether the state changed in a way that
/// needs a re-render.
///
/// # Errors
///
/// None at present. Fetch and configuration failures are recorded as
/// [`LoadPhase::Failed`] on the state instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount => Ok(mount(state)),
        Event::Unmount => {
            state.lifetime.unmount();
            state.scroll.animating = false;
            Ok((false, vec![]))
        }
        Event::Reload => {
            tracing::debug!("reloading user list");
            state.lifetime.unmount();
            Ok(mount(state))
        }
        Event::CloseFocus => {
            state.lifetime.unmount();
            state.scroll.animating = false;
            Ok((false, vec![Action::CloseFocus]))
        }
        Event::PermissionDenied => {
            if !state.lifetime.is_mounted() {
                state.lifetime.mount();
                state.reset_view();
            }
            if !state.phase.is_loading() {
                return Ok((false, vec![]));
            }
            state.fail(&RosterError::Permission(
                "web access is required to fetch users".to_string(),
            ));
            Ok((true, vec![]))
        }
        Event::UsersFetched {
            generation,
            status,
            body,
        } => {
            if !accepts_fetch_result(state, *generation) {
                tracing::debug!(generation, status, "discarding stale user list response");
                return Ok((false, vec![]));
            }

            if !is_success(*status) {
                state.fail(&RosterError::Http { status: *status });
                return Ok((true, vec![]));
            }

            match String::from_utf8(body.clone()) {
                Ok(body) => {
                    state.decoding = Some(*generation);
                    Ok((
                        false,
                        vec![Action::PostToWorker(WorkerMessage::decode_users(
                            *generation,
                            body,
                            state.trace_level.clone(),
                        ))],
                    ))
                }
                Err(e) => {
                    state.fail(&RosterError::Decode(e.to_string()));
                    Ok((true, vec![]))
                }
            }
        }
        Event::AvatarProbed {
            generation,
            url,
            status,
        } => {
            if !state.lifetime.is_current(*generation) {
                return Ok((false, vec![]));
            }
            let loaded = is_success(*status);
            if !loaded {
                tracing::debug!(url = %url, status, "avatar failed to load");
            }
            Ok((state.record_avatar_result(url, loaded), vec![]))
        }
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
        Event::CursorDown => {
            if !is_interactive(state) {
                return Ok((false, vec![]));
            }
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            if !is_interactive(state) {
                return Ok((false, vec![]));
            }
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::PreviousPage => {
            if !is_interactive(state) || !state.previous_page() {
                return Ok((false, vec![]));
            }
            Ok((true, after_page_change(state)))
        }
        Event::NextPage => {
            if !is_interactive(state) || !state.next_page() {
                return Ok((false, vec![]));
            }
            Ok((true, after_page_change(state)))
        }
        Event::SelectHighlighted => {
            let Some(index) = state.highlighted_index().filter(|_| is_interactive(state)) else {
                return Ok((false, vec![]));
            };
            if !state.select(index) {
                return Ok((false, vec![]));
            }
            Ok((true, reveal_selection(state)))
        }
        Event::SelectRow(page_offset) => {
            if !is_interactive(state) || state.select_row(*page_offset).is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, reveal_selection(state)))
        }
        Event::ScrollTick => {
            if !state.lifetime.is_mounted() || !state.scroll.animating {
                return Ok((false, vec![]));
            }
            let moved = state.advance_scroll();
            let actions = if state.scroll.animating {
                vec![Action::ScheduleScrollTick {
                    seconds: SCROLL_TICK_SECONDS,
                }]
            } else {
                vec![]
            };
            Ok((moved, actions))
        }
        Event::ScrollBy(delta) => {
            if !is_interactive(state) {
                return Ok((false, vec![]));
            }
            state.scroll_by(*delta);
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AvatarStatus;
    use crate::ui::theme::Theme;
    use crate::ui::viewmodel::Screen;
    use crate::worker::RosterWorker;
    use rstest::{fixture, rstest};
    use serde_json::json;

    const ENDPOINT: &str = "https://api.example.com/users";

    fn users_body(count: u64) -> Vec<u8> {
        let users: Vec<_> = (1..=count)
            .map(|id| {
                json!({
                    "id": id.to_string(),
                    "avatar": format!("https://cdn.example.com/{id}.png"),
                    "profile": {
                        "firstName": format!("First{id}"),
                        "lastName": format!("Last{id}"),
                        "username": format!("user{id}"),
                        "email": format!("user{id}@example.com"),
                    },
                    "jobTitle": format!("Job {id}"),
                    "Bio": format!("Bio {id}"),
                })
            })
            .collect();
        serde_json::to_vec(&users).unwrap()
    }

    fn run(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    /// Feeds every `PostToWorker` action through a worker and back into the handler.
    fn run_through_worker(state: &mut AppState, actions: Vec<Action>) -> Vec<Action> {
        let mut follow_up = Vec::new();
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    let response = RosterWorker.handle_message(message);
                    follow_up.extend(run(state, Event::WorkerResponse(response)).1);
                }
                other => follow_up.push(other),
            }
        }
        follow_up
    }

    fn deliver_users(state: &mut AppState, count: u64) -> Vec<Action> {
        let generation = state.lifetime.generation();
        let (_, actions) = run(
            state,
            Event::UsersFetched {
                generation,
                status: 200,
                body: users_body(count),
            },
        );
        run_through_worker(state, actions)
    }

    fn probe_urls(actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::ProbeAvatar { url, .. } => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    fn error_message(state: &AppState) -> String {
        match state.compute_viewmodel(24, 80) {
            Screen::Failed(view) => view.message,
            other => panic!("expected error screen, got {other:?}"),
        }
    }

    #[fixture]
    fn mounted() -> AppState {
        let mut state = AppState::new(Some(ENDPOINT.into()), Theme::default());
        run(&mut state, Event::Mount);
        state
    }

    #[fixture]
    fn loaded(mut mounted: AppState) -> AppState {
        deliver_users(&mut mounted, 5);
        mounted
    }

    #[test]
    fn mount_shows_loading_and_fetches_once() {
        let mut state = AppState::new(Some(ENDPOINT.into()), Theme::default());
        let (render, actions) = run(&mut state, Event::Mount);

        assert!(render);
        assert!(matches!(state.compute_viewmodel(24, 80), Screen::Loading(_)));
        assert_eq!(
            actions,
            vec![Action::FetchUsers {
                url: ENDPOINT.to_string(),
                context: RequestContext::Users { generation: 1 },
            }]
        );

        let (_, again) = run(&mut state, Event::Mount);
        assert!(again.is_empty());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("not a url"))]
    fn unusable_endpoint_fails_without_fetching(#[case] endpoint: Option<&str>) {
        let mut state = AppState::new(endpoint.map(String::from), Theme::default());
        let (_, actions) = run(&mut state, Event::Mount);

        assert!(actions.is_empty());
        assert!(error_message(&state).starts_with("Error loading data: Configuration error"));
    }

    #[rstest]
    fn server_error_is_shown_and_sticks(mut mounted: AppState) {
        let generation = mounted.lifetime.generation();
        run(
            &mut mounted,
            Event::UsersFetched {
                generation,
                status: 500,
                body: Vec::new(),
            },
        );
        assert_eq!(
            error_message(&mounted),
            "Error loading data: Request failed with status code 500"
        );

        let (render, _) = run(
            &mut mounted,
            Event::WorkerResponse(WorkerResponse::UsersDecoded {
                generation,
                users: Vec::new(),
            }),
        );
        assert!(!render);
        assert!(matches!(mounted.phase, LoadPhase::Failed { .. }));

        let (render, _) = run(&mut mounted, Event::NextPage);
        assert!(!render);
    }

    #[rstest]
    fn malformed_payload_fails_with_decode_error(mut mounted: AppState) {
        let generation = mounted.lifetime.generation();
        let (render, actions) = run(
            &mut mounted,
            Event::UsersFetched {
                generation,
                status: 200,
                body: br#"{"users":[]}"#.to_vec(),
            },
        );
        assert!(!render, "decoding happens off-thread");
        run_through_worker(&mut mounted, actions);

        assert!(error_message(&mounted).starts_with("Error loading data: Malformed user payload:"));
    }

    #[rstest]
    fn stale_generation_is_ignored(mut mounted: AppState) {
        let (render, actions) = run(
            &mut mounted,
            Event::UsersFetched {
                generation: 99,
                status: 200,
                body: users_body(2),
            },
        );

        assert!(!render);
        assert!(actions.is_empty());
        assert!(mounted.phase.is_loading());
    }

    #[rstest]
    fn response_after_unmount_is_discarded(mut mounted: AppState) {
        let generation = mounted.lifetime.generation();
        let (_, fetched) = run(
            &mut mounted,
            Event::UsersFetched {
                generation,
                status: 200,
                body: users_body(3),
            },
        );
        run(&mut mounted, Event::Unmount);
        run_through_worker(&mut mounted, fetched);

        assert!(mounted.records.is_empty());
        assert!(mounted.phase.is_loading());
    }

    #[rstest]
    fn reload_supersedes_in_flight_request(mut mounted: AppState) {
        let first = mounted.lifetime.generation();
        let (_, actions) = run(&mut mounted, Event::Reload);
        let second = mounted.lifetime.generation();

        assert_ne!(first, second);
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchUsers { context: RequestContext::Users { generation }, .. }] if *generation == second
        ));

        let (render, _) = run(
            &mut mounted,
            Event::UsersFetched {
                generation: first,
                status: 500,
                body: Vec::new(),
            },
        );
        assert!(!render);
        assert!(mounted.phase.is_loading());
    }

    #[rstest]
    fn loaded_list_probes_first_page_avatars(mut mounted: AppState) {
        let actions = deliver_users(&mut mounted, 5);

        assert_eq!(mounted.phase, LoadPhase::Ready);
        assert_eq!(
            probe_urls(&actions),
            (1..=4)
                .map(|id| format!("https://cdn.example.com/{id}.png"))
                .collect::<Vec<_>>()
        );
    }

    #[rstest]
    fn paging_is_bounded_and_probes_new_rows(mut loaded: AppState) {
        let (render, _) = run(&mut loaded, Event::PreviousPage);
        assert!(!render);
        assert_eq!(loaded.current_page, 1);

        let (render, actions) = run(&mut loaded, Event::NextPage);
        assert!(render);
        assert_eq!(loaded.current_page, 2);
        assert_eq!(probe_urls(&actions), vec!["https://cdn.example.com/5.png".to_string()]);

        let (render, _) = run(&mut loaded, Event::NextPage);
        assert!(!render);
        assert_eq!(loaded.current_page, 2);
    }

    #[rstest]
    fn selection_persists_across_pages(mut loaded: AppState) {
        run(&mut loaded, Event::CursorDown);
        run(&mut loaded, Event::SelectHighlighted);
        run(&mut loaded, Event::NextPage);

        let Screen::Ready(view) = loaded.compute_viewmodel(40, 120) else {
            panic!("expected ready screen");
        };
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.detail.map(|d| d.name), Some("First2 Last2".to_string()));
    }

    #[rstest]
    fn clicking_past_the_last_row_does_nothing(mut loaded: AppState) {
        run(&mut loaded, Event::NextPage);
        let (render, _) = run(&mut loaded, Event::SelectRow(2));

        assert!(!render);
        assert_eq!(loaded.selected, None);
    }

    #[rstest]
    fn stacked_selection_animates_scroll_to_detail(mut loaded: AppState) {
        loaded.set_viewport(20, 80);
        let (_, actions) = run(&mut loaded, Event::SelectRow(0));
        assert!(actions.contains(&Action::ScheduleScrollTick {
            seconds: SCROLL_TICK_SECONDS
        }));

        let mut ticks = 0;
        loop {
            let (_, next) = run(&mut loaded, Event::ScrollTick);
            ticks += 1;
            if next.is_empty() {
                break;
            }
            assert!(ticks < 50, "scroll animation never settled");
        }
        assert_eq!(loaded.scroll.offset, loaded.layout().detail_scroll_target());
        assert!(loaded.scroll.offset > 0);
    }

    #[rstest]
    fn scroll_animation_stops_when_view_unmounts(mut loaded: AppState) {
        loaded.set_viewport(20, 80);
        run(&mut loaded, Event::SelectRow(0));
        let offset = loaded.scroll.offset;

        run(&mut loaded, Event::Unmount);
        let (render, actions) = run(&mut loaded, Event::ScrollTick);

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(loaded.scroll.offset, offset);
        assert!(!loaded.scroll.animating);
    }

    #[rstest]
    fn mount_while_mounted_keeps_records_and_selection(mut loaded: AppState) {
        run(&mut loaded, Event::NextPage);
        run(&mut loaded, Event::SelectRow(0));

        let (render, actions) = run(&mut loaded, Event::Mount);

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(loaded.records.len(), 5);
        assert_eq!(loaded.current_page, 2);
        assert_eq!(loaded.selected, Some(4));
    }

    #[rstest]
    fn null_avatar_record_shows_placeholder(mut mounted: AppState) {
        let generation = mounted.lifetime.generation();
        let body = serde_json::to_vec(&json!([
            {"id": 1, "avatar": null, "profile": {"firstName": null, "lastName": "Null"}},
            {"id": 2, "avatar": "https://cdn.example.com/2.png", "profile": {"firstName": "Two"}},
        ]))
        .unwrap();
        let (_, actions) = run(
            &mut mounted,
            Event::UsersFetched {
                generation,
                status: 200,
                body,
            },
        );
        let probes = run_through_worker(&mut mounted, actions);

        assert_eq!(mounted.phase, LoadPhase::Ready);
        assert_eq!(probe_urls(&probes), vec!["https://cdn.example.com/2.png".to_string()]);
        let Screen::Ready(view) = mounted.compute_viewmodel(24, 80) else {
            panic!("expected ready screen");
        };
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].avatar.status, AvatarStatus::Failed);
        assert!(view.rows[0].avatar.shows_placeholder());
    }

    #[rstest]
    fn worker_error_fails_the_instance_it_was_decoding_for(mut mounted: AppState) {
        let generation = mounted.lifetime.generation();
        run(
            &mut mounted,
            Event::UsersFetched {
                generation,
                status: 200,
                body: users_body(2),
            },
        );
        let error = WorkerResponse::Error {
            message: "worker gone".into(),
        };
        let (render, _) = run(&mut mounted, Event::WorkerResponse(error));

        assert!(render);
        assert_eq!(
            error_message(&mounted),
            "Error loading data: Worker communication error: worker gone"
        );
    }

    #[rstest]
    fn worker_error_from_superseded_instance_is_ignored(mut mounted: AppState) {
        let first = mounted.lifetime.generation();
        run(
            &mut mounted,
            Event::UsersFetched {
                generation: first,
                status: 200,
                body: users_body(2),
            },
        );
        run(&mut mounted, Event::Reload);

        let error = WorkerResponse::Error { message: "old".into() };
        let (render, _) = run(&mut mounted, Event::WorkerResponse(error));

        assert!(!render);
        assert!(mounted.phase.is_loading());
        assert_eq!(mounted.decoding, None);
    }

    #[rstest]
    fn wide_selection_does_not_scroll(mut loaded: AppState) {
        loaded.set_viewport(40, 140);
        let (_, actions) = run(&mut loaded, Event::SelectRow(0));

        assert!(!actions
            .iter()
            .any(|a| matches!(a, Action::ScheduleScrollTick { .. })));
    }

    #[rstest]
    fn failed_avatar_falls_back_to_placeholder(mut loaded: AppState) {
        let generation = loaded.lifetime.generation();
        let url = "https://cdn.example.com/1.png".to_string();

        let (render, _) = run(
            &mut loaded,
            Event::AvatarProbed {
                generation,
                url: url.clone(),
                status: 404,
            },
        );
        assert!(render);

        let Screen::Ready(view) = loaded.compute_viewmodel(24, 80) else {
            panic!("expected ready screen");
        };
        assert!(view.rows[0].avatar.shows_placeholder());
        assert_eq!(view.rows[1].avatar.status, AvatarStatus::Pending);
    }

    #[rstest]
    fn avatar_result_from_previous_instance_is_ignored(mut loaded: AppState) {
        let old = loaded.lifetime.generation();
        run(&mut loaded, Event::Reload);
        deliver_users(&mut loaded, 5);

        let (render, _) = run(
            &mut loaded,
            Event::AvatarProbed {
                generation: old,
                url: "https://cdn.example.com/1.png".into(),
                status: 200,
            },
        );
        assert!(!render);
        assert_eq!(
            loaded.avatar_status("https://cdn.example.com/1.png"),
            AvatarStatus::Pending
        );
    }

    #[rstest]
    fn close_focus_unmounts_and_hides(mut mounted: AppState) {
        let (_, actions) = run(&mut mounted, Event::CloseFocus);

        assert_eq!(actions, vec![Action::CloseFocus]);
        assert!(!mounted.lifetime.is_mounted());
    }

    #[rstest]
    fn permission_denied_shows_error(mut mounted: AppState) {
        run(&mut mounted, Event::PermissionDenied);
        assert!(error_message(&mounted).contains("Permission denied"));
    }

    #[test]
    fn permission_denied_before_mount_fails_without_fetching() {
        let mut state = AppState::new(Some(ENDPOINT.into()), Theme::default());
        let (render, actions) = run(&mut state, Event::PermissionDenied);

        assert!(render);
        assert!(actions.is_empty());
        assert!(state.lifetime.is_mounted());
        assert!(error_message(&state).contains("Permission denied"));
    }

    #[test]
    fn empty_list_renders_without_rows() {
        let mut state = AppState::new(Some(ENDPOINT.into()), Theme::default());
        run(&mut state, Event::Mount);
        let actions = deliver_users(&mut state, 0);

        assert!(actions.is_empty());
        let Screen::Ready(view) = state.compute_viewmodel(24, 80) else {
            panic!("expected ready screen");
        };
        assert!(view.rows.is_empty());
        assert!(!view.pager.can_go_back && !view.pager.can_go_forward);
    }
}
