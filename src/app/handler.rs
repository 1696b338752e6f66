use crate::app::action::Action;
use crate::app::event::{AppEvent, FormId};
use crate::app::form::FormField;
use crate::app::menu::MenuItem;
use crate::app::route::Route;
use crate::app::state::AppState;
use crate::registration::flow::SubmitError;
use chrono::Utc;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

pub const SUBMIT_SUCCEEDED: &str = "Registration submitted! Redirecting...";
pub const SUBMIT_FAILED: &str = "Failed to submit registration. Please try again.";

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::SubmissionDelivered { form_id } => handle_delivered(state, form_id),
        AppEvent::SubmissionFailed { form_id, error } => {
            handle_failed(state, form_id, &error);
            vec![]
        }
        AppEvent::RedirectDue { url } => vec![Action::Redirect { url }],
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_delivered(state: &mut AppState, form_id: FormId) -> Vec<Action> {
    match state.form_mut(form_id) {
        Some(form) => {
            if !form.flow.delivered() {
                tracing::warn!(form_id, "Delivery reported for a form that was not submitting");
                return vec![];
            }
        }
        // The user navigated away mid-flight; the redirect still happens.
        None => tracing::debug!(form_id, "Delivery for unmounted form"),
    }

    state.notify_success(SUBMIT_SUCCEEDED);
    vec![Action::ScheduleRedirect {
        url: state.config.redirect.url.clone(),
        delay: Duration::from_millis(state.config.redirect.delay_ms),
    }]
}

fn handle_failed(state: &mut AppState, form_id: FormId, error: &str) {
    tracing::warn!(form_id, error, "Submission failed, form editable again");
    if let Some(form) = state.form_mut(form_id) {
        form.flow.failed();
    }
    state.notify_error(SUBMIT_FAILED);
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);

    if state.toasts.prune(Instant::now()) {
        state.dirty = true;
    }

    // Keep the spinner moving
    if state.form.as_ref().is_some_and(|f| f.is_submitting()) {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // F2 toggles the navigation menu
    if key.code == KeyCode::F(2) {
        state.menu.toggle();
        return vec![];
    }

    // Menu captures all input when visible
    if state.menu.visible {
        return handle_menu_key(state, key);
    }

    match state.route {
        Route::Landing => handle_landing_key(state, key),
        Route::Register => handle_form_key(state, key),
        Route::Auth | Route::NotFound(_) => handle_info_key(state, key),
    }
}

fn handle_menu_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => state.menu.close(),
        KeyCode::Up => state.menu.move_up(),
        KeyCode::Down => state.menu.move_down(),
        KeyCode::Enter => {
            let item = state.menu.selected_item();
            match item.target() {
                Some(route) => state.navigate(route),
                None => {
                    if item == MenuItem::About {
                        tracing::info!("About clicked");
                    }
                }
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_landing_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            state.navigate(Route::Register);
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_info_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            state.navigate(Route::Landing);
            vec![]
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(form) = state.form.as_mut() else {
        return vec![];
    };

    // The success screen has nothing to edit
    if form.is_success() {
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('s') {
        return submit(state);
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus_next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev();
            return vec![];
        }
        _ => {}
    }

    let focus = form.focus;
    match focus {
        FormField::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(state),
            _ => vec![],
        },
        FormField::Stream => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                form.stream = form.stream.toggled();
                vec![]
            }
            KeyCode::Enter => submit(state),
            _ => vec![],
        },
        // Enter adds a line to the address but submits from any other field
        FormField::CollegeAddress if key.code == KeyCode::Enter => {
            form.college_address.insert_newline();
            vec![]
        }
        _ if key.code == KeyCode::Enter => submit(state),
        _ => {
            if let Some(input) = form.focused_input_mut() {
                match key.code {
                    KeyCode::Char('w') if ctrl => input.delete_word_back(),
                    KeyCode::Char(c) if !ctrl => input.insert_char(c),
                    KeyCode::Backspace => input.delete_back(),
                    KeyCode::Delete => input.delete_forward(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_home(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
            vec![]
        }
    }
}

/// Validate the mounted form and start its single delivery attempt.
fn submit(state: &mut AppState) -> Vec<Action> {
    let Some(form) = state.form.as_mut() else {
        return vec![];
    };
    let form_id = form.id;
    let draft = form.draft();

    match form.flow.begin(&draft, Utc::now()) {
        Ok(payload) => vec![Action::Submit { form_id, payload }],
        Err(SubmitError::Invalid(reason)) => {
            tracing::debug!(form_id, %reason, "Registration rejected");
            state.notify_error(reason.to_string());
            vec![]
        }
        Err(reason) => {
            tracing::debug!(form_id, %reason, "Submit ignored");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::RegistrationForm;
    use crate::app::toast::ToastKind;
    use crate::config::AppConfig;
    use crate::registration::draft::Stream;
    use crate::registration::flow::FlowState;
    use crate::registration::payload::EMAIL_NOT_PROVIDED;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        press_with(state, code, KeyModifiers::NONE)
    }

    fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    /// Registration screen with a valid draft and focus on the submit button.
    fn ready_state() -> AppState {
        let mut state = AppState::new(AppConfig::default(), Route::Register);
        let mut form = RegistrationForm::filled(1);
        form.focus = FormField::Submit;
        state.form = Some(form);
        state
    }

    fn submitted_form_id(actions: &[Action]) -> FormId {
        match actions {
            [Action::Submit { form_id, .. }] => *form_id,
            other => panic!("expected one Submit action, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_submission_emits_one_submit() {
        let mut state = ready_state();
        let actions = press(&mut state, KeyCode::Enter);

        match actions.as_slice() {
            [Action::Submit { form_id, payload }] => {
                assert_eq!(*form_id, 1);
                assert_eq!(payload.email, EMAIL_NOT_PROVIDED);
                assert_eq!(payload.stream, Stream::Science);
                assert_eq!(payload.contact_number, "9876543210");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
        assert!(state.form.as_ref().unwrap().is_submitting());
    }

    #[test]
    fn test_repeated_submit_while_submitting_is_ignored() {
        let mut state = ready_state();
        submitted_form_id(&press(&mut state, KeyCode::Enter));

        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(press(&mut state, KeyCode::Char(' ')).is_empty());
        assert!(press_with(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL).is_empty());
        assert!(state.form.as_ref().unwrap().is_submitting());
    }

    #[test]
    fn test_success_schedules_one_redirect() {
        let mut state = ready_state();
        let form_id = submitted_form_id(&press(&mut state, KeyCode::Enter));

        let actions = handle_event(&mut state, AppEvent::SubmissionDelivered { form_id });
        match actions.as_slice() {
            [Action::ScheduleRedirect { url, delay }] => {
                assert_eq!(url, "https://sites.google.com/klebcadwd.com/udgosh");
                assert_eq!(*delay, Duration::from_millis(2000));
            }
            other => panic!("expected ScheduleRedirect, got {other:?}"),
        }
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.flow.state(), FlowState::Succeeded);
        let toast = state.toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.text, SUBMIT_SUCCEEDED);

        // A stray second report does not schedule another redirect
        assert!(handle_event(&mut state, AppEvent::SubmissionDelivered { form_id }).is_empty());
        // Nothing left to submit
        assert!(press(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn test_failure_returns_to_editing_with_values_intact() {
        let mut state = ready_state();
        let before = state.form.as_ref().unwrap().draft();
        let form_id = submitted_form_id(&press(&mut state, KeyCode::Enter));

        let actions = handle_event(
            &mut state,
            AppEvent::SubmissionFailed {
                form_id,
                error: "connection refused".to_string(),
            },
        );
        assert!(actions.is_empty());

        let form = state.form.as_ref().unwrap();
        assert_eq!(form.flow.state(), FlowState::Editing);
        assert_eq!(form.draft(), before);
        let toast = state.toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.text, SUBMIT_FAILED);

        // Resubmission is allowed
        submitted_form_id(&press(&mut state, KeyCode::Enter));
    }

    #[test]
    fn test_validation_error_shows_toast_without_submitting() {
        let mut state = ready_state();
        state.form.as_mut().unwrap().contact_number.delete_back();

        assert!(press(&mut state, KeyCode::Enter).is_empty());
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.flow.state(), FlowState::Editing);
        assert_eq!(
            state.toasts.latest().unwrap().text,
            "Please enter a valid 10-digit contact number"
        );
    }

    #[test]
    fn test_empty_form_rejected() {
        let mut state = AppState::new(AppConfig::default(), Route::Register);
        assert!(press_with(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL).is_empty());
        assert_eq!(
            state.toasts.latest().unwrap().text,
            "Please fill in all required fields"
        );
    }

    #[test]
    fn test_typing_fills_the_form_end_to_end() {
        let mut state = AppState::new(AppConfig::default(), Route::Register);
        type_text(&mut state, "KLE BCA College");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Vidyanagar");
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "Hubballi");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Dr. Patil");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "9876543210");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "3x");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);

        let draft = state.form.as_ref().unwrap().draft();
        assert_eq!(draft.college_address, "Vidyanagar\nHubballi");
        assert_eq!(draft.stream, Stream::Science);

        // Enter on the stream selector submits; "3x" parses leniently to 3
        match press(&mut state, KeyCode::Enter).as_slice() {
            [Action::Submit { payload, .. }] => {
                assert_eq!(payload.participants, "3x");
                assert_eq!(payload.college_name, "KLE BCA College");
            }
            other => panic!("expected Submit, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_in_single_line_field_submits() {
        let mut state = ready_state();
        state.form.as_mut().unwrap().focus = FormField::Email;
        submitted_form_id(&press(&mut state, KeyCode::Enter));
    }

    #[test]
    fn test_outcome_for_unmounted_form_still_redirects() {
        let mut state = ready_state();
        let form_id = submitted_form_id(&press(&mut state, KeyCode::Enter));

        state.navigate(Route::Landing);
        state.navigate(Route::Register);
        let fresh_id = state.form.as_ref().unwrap().id;
        assert_ne!(fresh_id, form_id);

        let actions = handle_event(&mut state, AppEvent::SubmissionDelivered { form_id });
        assert!(matches!(actions.as_slice(), [Action::ScheduleRedirect { .. }]));
        assert_eq!(state.form.as_ref().unwrap().flow.state(), FlowState::Editing);
    }

    #[test]
    fn test_failure_for_unmounted_form_leaves_new_form_alone() {
        let mut state = ready_state();
        let form_id = submitted_form_id(&press(&mut state, KeyCode::Enter));
        state.navigate(Route::Landing);

        let actions = handle_event(
            &mut state,
            AppEvent::SubmissionFailed {
                form_id,
                error: "dns error".to_string(),
            },
        );
        assert!(actions.is_empty());
        assert!(state.form.is_none());
        assert_eq!(state.toasts.latest().unwrap().text, SUBMIT_FAILED);
    }

    #[test]
    fn test_redirect_due_becomes_redirect() {
        let mut state = ready_state();
        let actions = handle_event(
            &mut state,
            AppEvent::RedirectDue {
                url: "https://example.org/done".to_string(),
            },
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::Redirect { url }] if url == "https://example.org/done"
        ));
    }

    #[test]
    fn test_menu_navigation() {
        let mut state = AppState::new(AppConfig::default(), Route::Landing);
        press(&mut state, KeyCode::F(2));
        assert!(state.menu.visible);

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route, Route::Register);
        assert!(!state.menu.visible);
        assert!(state.form.is_some());

        // Typing while the menu is open does not reach the form
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "abc");
        press(&mut state, KeyCode::Esc);
        assert!(state.form.as_ref().unwrap().college_name.text.is_empty());
    }

    #[test]
    fn test_menu_about_keeps_menu_open() {
        let mut state = AppState::new(AppConfig::default(), Route::Landing);
        press(&mut state, KeyCode::F(2));
        for _ in 0..3 {
            press(&mut state, KeyCode::Down);
        }
        press(&mut state, KeyCode::Enter);
        assert!(state.menu.visible);
        assert_eq!(state.route, Route::Landing);
    }

    #[test]
    fn test_landing_and_info_screens() {
        let mut state = AppState::new(AppConfig::default(), Route::NotFound("/x".to_string()));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route, Route::Landing);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.route, Route::Register);

        let mut state = AppState::new(AppConfig::default(), Route::Landing);
        assert!(matches!(press(&mut state, KeyCode::Char('q')).as_slice(), [Action::Quit]));
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut state = ready_state();
        let actions = press_with(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }
}
