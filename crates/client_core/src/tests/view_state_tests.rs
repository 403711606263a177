use super::*;
use crate::{controller::ControllerOutcome, TransportErrorKind};

fn division(id: &str, division_id: &str, name: &str, status: DivisionStatus) -> Division {
    Division {
        id: RecordId::new(id),
        division_id: division_id.to_string(),
        name: name.to_string(),
        description: None,
        head: None,
        parent_organization: None,
        budget: None,
        status,
        created_at: None,
    }
}

fn sample_divisions() -> Vec<Division> {
    let mut finance = division("1", "DIV-001", "Finance", DivisionStatus::Active);
    finance.description = Some("Budgets and reporting".into());
    finance.head = Some("Dana Whitfield".into());
    finance.budget = Some(250_000.0);

    let mut research = division("2", "DIV-002", "Research", DivisionStatus::Inactive);
    research.head = Some("Ari Banerjee".into());

    let mut logistics = division("3", "DIV-004", "Logistics", DivisionStatus::Active);
    logistics.description = Some("Fleet, warehousing and FINANCE liaison".into());

    vec![finance, research, logistics]
}

fn loaded_state() -> ViewState {
    let mut state = ViewState::new();
    let _ = state.begin_load();
    state.apply(ControllerOutcome::Loaded(Ok(sample_divisions())));
    state
}

#[test]
fn suggestion_fills_the_first_gap() {
    assert_eq!(suggest_division_id(&sample_divisions()), "DIV-003");
    assert_eq!(suggest_division_id(&[]), "DIV-001");
}

#[test]
fn suggestion_never_collides_with_loaded_ids() {
    let mut divisions = Vec::new();
    for n in 1..=25 {
        let suggested = suggest_division_id(&divisions);
        assert!(suggested.starts_with("DIV-"));
        assert_eq!(suggested.len(), 7, "{suggested}");
        assert!(divisions.iter().all(|d: &Division| d.division_id != suggested));
        divisions.push(division(&n.to_string(), &suggested, "x", DivisionStatus::Active));
    }
    assert_eq!(suggest_division_id(&divisions), "DIV-026");
}

#[test]
fn suggestion_ignores_ids_in_other_shapes() {
    let divisions = vec![
        division("1", "DIV-1", "a", DivisionStatus::Active),
        division("2", "div-001", "b", DivisionStatus::Active),
    ];
    assert_eq!(suggest_division_id(&divisions), "DIV-001");
}

#[test]
fn filter_matches_exactly_the_predicate() {
    let divisions = sample_divisions();
    let terms = ["", "fin", "FIN", "ari", "fleet", "zzz", "DIV-001", " "];
    for filter in StatusFilter::OPTIONS {
        for term in terms {
            let visible: Vec<&str> = filter_divisions(&divisions, term, filter)
                .into_iter()
                .map(|d| d.id.as_str())
                .collect();
            let needle = term.to_lowercase();
            let expected: Vec<&str> = divisions
                .iter()
                .filter(|d| {
                    let status_ok =
                        filter == StatusFilter::All || filter == StatusFilter::Only(d.status);
                    let text_ok = term.is_empty()
                        || [Some(d.name.as_str()), d.description.as_deref(), d.head.as_deref()]
                            .into_iter()
                            .flatten()
                            .any(|field| field.to_lowercase().contains(&needle));
                    status_ok && text_ok
                })
                .map(|d| d.id.as_str())
                .collect();
            assert_eq!(visible, expected, "filter={filter:?} term={term:?}");
        }
    }
}

#[test]
fn filter_combines_search_and_status() {
    let divisions = sample_divisions();
    let active_fin: Vec<&str> =
        filter_divisions(&divisions, "finance", StatusFilter::Only(DivisionStatus::Active))
            .into_iter()
            .map(|d| d.division_id.as_str())
            .collect();
    assert_eq!(active_fin, vec!["DIV-001", "DIV-004"]);

    let inactive: Vec<&str> =
        filter_divisions(&divisions, "", StatusFilter::Only(DivisionStatus::Inactive))
            .into_iter()
            .map(|d| d.division_id.as_str())
            .collect();
    assert_eq!(inactive, vec!["DIV-002"]);
}

#[test]
fn empty_state_distinguishes_no_records_from_no_matches() {
    assert_eq!(empty_state_message("", StatusFilter::All), NO_RECORDS_MESSAGE);
    assert_eq!(empty_state_message("ops", StatusFilter::All), NO_MATCHES_MESSAGE);
    assert_eq!(
        empty_state_message("", StatusFilter::Only(DivisionStatus::Inactive)),
        NO_MATCHES_MESSAGE
    );
}

#[test]
fn load_transitions_through_loading() {
    let mut state = ViewState::new();
    assert_eq!(state.load_state(), LoadState::Idle);

    state.set_error("stale");
    assert_eq!(state.begin_load(), ControllerRequest::Load);
    assert!(state.is_loading());
    assert!(state.error().is_none());

    state.apply(ControllerOutcome::Loaded(Ok(sample_divisions())));
    assert_eq!(state.load_state(), LoadState::Loaded);
    assert_eq!(state.divisions().len(), 3);
}

#[test]
fn failed_load_clears_loading_and_sets_banner() {
    let mut state = ViewState::new();
    let _ = state.begin_load();
    state.apply(ControllerOutcome::Loaded(Err(ClientError::Transport {
        kind: TransportErrorKind::Timeout,
        message: "timeout of 10000ms exceeded".into(),
    })));

    assert_eq!(state.load_state(), LoadState::Errored);
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("timeout of 10000ms exceeded"));
}

#[test]
fn open_create_prefills_suggested_id_with_active_status() {
    let mut state = loaded_state();
    state.draft_mut().name = "left over".into();

    state.open_create();

    assert_eq!(state.form(), &FormDialog::Create);
    assert_eq!(state.draft().division_id, "DIV-003");
    assert_eq!(state.draft().name, "");
    assert_eq!(state.draft().status, DivisionStatus::Active);
}

#[test]
fn open_edit_copies_record_into_draft() {
    let mut state = loaded_state();

    assert!(state.open_edit(&RecordId::new("1")));

    assert_eq!(state.form(), &FormDialog::Edit(RecordId::new("1")));
    let draft = state.draft();
    assert_eq!(draft.division_id, "DIV-001");
    assert_eq!(draft.head, "Dana Whitfield");
    assert_eq!(draft.parent_organization, "");
    assert_eq!(draft.budget, "250000");
}

#[test]
fn open_edit_ignores_unknown_ids() {
    let mut state = loaded_state();
    assert!(!state.open_edit(&RecordId::new("404")));
    assert!(!state.form().is_open());
}

#[test]
fn close_form_discards_the_draft() {
    let mut state = loaded_state();
    state.open_create();
    state.draft_mut().name = "Ops".into();

    state.close_form();

    assert!(!state.form().is_open());
    assert_eq!(state.draft(), &DivisionDraft::default());
}

#[test]
fn submit_requires_division_id_and_name() {
    let mut state = loaded_state();
    state.open_create();
    state.draft_mut().name = "   ".into();

    let err = state.submit().expect_err("must reject");

    assert_eq!(err, SubmitError::Validation(REQUIRED_FIELDS_MESSAGE.into()));
    assert_eq!(state.error(), Some(REQUIRED_FIELDS_MESSAGE));
    assert!(state.form().is_open());
    assert!(!state.is_busy());
}

#[test]
fn submit_coerces_budget_and_targets_create_or_update() {
    let mut state = loaded_state();
    state.open_create();
    state.draft_mut().name = "  Ops ".into();
    state.draft_mut().budget = " 1234.5 ".into();

    let request = state.submit().expect("valid");
    let ControllerRequest::Save { target, input } = request else {
        panic!("expected a save request");
    };
    assert_eq!(target, SaveTarget::Create);
    assert_eq!(input.name, "Ops");
    assert_eq!(input.budget, Some(1234.5));
    assert_eq!(state.pending(), Some(PendingOperation::Save));

    let mut state = loaded_state();
    state.open_edit(&RecordId::new("2"));
    let ControllerRequest::Save { target, input } = state.submit().expect("valid") else {
        panic!("expected a save request");
    };
    assert_eq!(target, SaveTarget::Update(RecordId::new("2")));
    assert_eq!(input.budget, None);
    assert_eq!(input.status, DivisionStatus::Inactive);
}

#[test]
fn submit_rejects_bad_budgets_locally() {
    for bad in ["abc", "-5", "inf", "NaN"] {
        let mut state = loaded_state();
        state.open_create();
        state.draft_mut().name = "Ops".into();
        state.draft_mut().budget = bad.into();

        assert_eq!(
            state.submit(),
            Err(SubmitError::Validation(INVALID_BUDGET_MESSAGE.into())),
            "budget={bad:?}"
        );
        assert_eq!(state.error(), Some(INVALID_BUDGET_MESSAGE));
    }
}

#[test]
fn second_submit_is_refused_while_the_first_is_in_flight() {
    let mut state = loaded_state();
    state.open_create();
    state.draft_mut().name = "Ops".into();

    state.submit().expect("first submit");
    assert_eq!(state.submit(), Err(SubmitError::InFlight));
}

#[test]
fn submit_without_open_dialog_is_refused() {
    let mut state = loaded_state();
    assert_eq!(state.submit(), Err(SubmitError::NoDialog));
    assert_eq!(state.confirm_delete(), Err(SubmitError::NoDialog));
}

#[test]
fn failed_save_keeps_dialog_open() {
    let mut state = loaded_state();
    state.open_create();
    state.draft_mut().name = "Ops".into();
    state.submit().expect("submit");

    state.apply(ControllerOutcome::Saved {
        result: Err(ClientError::Service {
            status: 409,
            body: r#"{"error":"Division ID already exists"}"#.into(),
        }),
        reload: None,
    });

    assert_eq!(state.form(), &FormDialog::Create);
    assert_eq!(state.error(), Some("Division ID already exists"));
    assert_eq!(state.draft().name, "Ops");
    assert!(!state.is_busy());
}

#[test]
fn delete_closes_confirmation_even_on_failure() {
    let mut state = loaded_state();
    state.request_delete(RecordId::new("2"));
    assert!(state.confirm().is_open());

    let request = state.confirm_delete().expect("confirm");
    assert_eq!(request, ControllerRequest::Delete { id: RecordId::new("2") });

    state.apply(ControllerOutcome::Deleted {
        result: Err(ClientError::Transport {
            kind: TransportErrorKind::Connect,
            message: String::new(),
        }),
        reload: None,
    });

    assert!(!state.confirm().is_open());
    assert_eq!(state.error(), Some(DELETE_FAILED_FALLBACK));
    assert_eq!(state.divisions().len(), 3);
}

#[test]
fn cancel_delete_closes_without_request() {
    let mut state = loaded_state();
    state.request_delete(RecordId::new("1"));
    state.cancel_delete();
    assert_eq!(state.confirm(), &ConfirmDialog::Closed);
    assert!(!state.is_busy());
}

#[test]
fn failed_dispatch_unwinds_markers() {
    let mut state = ViewState::new();
    let _ = state.begin_load();
    state.fail_dispatch("queue full");
    assert_eq!(state.load_state(), LoadState::Errored);
    assert_eq!(state.error(), Some("queue full"));

    let mut state = loaded_state();
    state.request_delete(RecordId::new("1"));
    state.confirm_delete().expect("confirm");
    state.fail_dispatch("worker gone");
    assert!(!state.is_busy());
    assert!(!state.confirm().is_open());
}
