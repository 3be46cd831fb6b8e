#[cfg(test)]
mod integration_tests {
    use crate::api::{PredictRequest, PredictResponse};
    use crate::catalog::LocationCatalog;
    use crate::classifier::{DEFAULT_TOP_N, Severity, rank_categories};
    use crate::combobox::Key;
    use crate::date::DatePreset;
    use crate::error::{FALLBACK_MESSAGE, PredictError};
    use crate::request::RequestState;
    use crate::session::{ComboboxEvent, PredictorSession};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    /// Session with the two-entry catalog and "วังทองหลาง" confirmed via the keyboard.
    fn session_with_selection() -> PredictorSession {
        let mut session = PredictorSession::new(today());
        session.load_catalog(LocationCatalog::new(["วังทองหลาง", "ลาดพร้าว"]));
        session.apply(ComboboxEvent::Input("วัง".to_string()));
        session.apply(ComboboxEvent::Key(Key::Enter));
        session
    }

    fn response(body: &str) -> PredictResponse {
        serde_json::from_str(body).expect("valid predict response")
    }

    #[test]
    fn test_search_confirm_and_submit() {
        let mut session = PredictorSession::new(today());
        session.load_catalog(LocationCatalog::new(["วังทองหลาง", "ลาดพร้าว"]));

        // Typing narrows the view
        session.apply(ComboboxEvent::Input("วัง".to_string()));
        let view = session.combobox().filtered_view(session.catalog());
        assert_eq!(view, vec!["วังทองหลาง"]);

        // Enter confirms and asks the host to suppress form submission
        let outcome = session.apply(ComboboxEvent::Key(Key::Enter));
        assert!(outcome.prevent_default);
        assert_eq!(session.combobox().selected(), Some("วังทองหลาง"));
        assert!(!session.combobox().is_open());

        // Submit decomposes the date exactly
        session.set_date("2024-03-15");
        let pending = session.submit().expect("submit accepted");
        assert_eq!(
            pending.request,
            PredictRequest {
                subdistrict: "วังทองหลาง".to_string(),
                year: 2024,
                month: 3,
                day: 15,
            }
        );
        assert!(session.is_loading());
        assert_eq!(session.outbound(), Some(&pending));
    }

    #[test]
    fn test_successful_prediction_is_ranked_and_classified() {
        let mut session = session_with_selection();
        let pending = session.submit().expect("submit accepted");

        session.settle(
            pending.ticket,
            Ok(response(
                r#"{"predictions": {"ถนน": 10, "น้ำท่วม": 4, "PM2.5": 1}, "total_predicted": 15}"#,
            )),
        );

        assert!(!session.is_loading());
        assert_eq!(session.outbound(), None);
        let result = session.result().expect("prediction stored");
        assert_eq!(result.subdistrict, "วังทองหลาง");
        assert_eq!(result.date, "2024-03-10");

        let ranked: Vec<String> = rank_categories(&result.categories)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(ranked, vec!["ถนน", "น้ำท่วม", "PM2.5"]);
        assert_eq!(result.severity(), Severity::High);

        let breakdown = result.breakdown(DEFAULT_TOP_N);
        assert_eq!(breakdown.bars.len(), 3);
        assert!(breakdown.others.is_empty());
    }

    #[test]
    fn test_failed_prediction_shows_server_detail() {
        let mut session = session_with_selection();
        let pending = session.submit().expect("submit accepted");

        session.settle(
            pending.ticket,
            Err(PredictError::from_failure(500, r#"{"detail": "model unavailable"}"#)),
        );

        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("model unavailable"));
        assert_eq!(session.result(), None);
        assert!(session.can_submit());
    }

    #[test]
    fn test_failure_without_detail_uses_fallback() {
        let mut session = session_with_selection();
        let pending = session.submit().expect("submit accepted");
        session.settle(pending.ticket, Err(PredictError::Network("Failed to fetch".to_string())));
        assert_eq!(session.error(), Some(FALLBACK_MESSAGE));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_submit_blocked_without_selection() {
        let mut session = PredictorSession::new(today());
        session.load_catalog(LocationCatalog::new(["วังทองหลาง", "ลาดพร้าว"]));

        // Typed text alone is not a selection
        session.apply(ComboboxEvent::Input("ลาดพร้าว".to_string()));
        assert!(!session.can_submit());
        assert_eq!(session.submit(), None);
        assert_eq!(session.request(), &RequestState::Idle);
    }

    #[test]
    fn test_submit_blocked_while_in_flight() {
        let mut session = session_with_selection();
        assert!(session.submit().is_some());
        assert!(!session.can_submit());
        assert_eq!(session.submit(), None);
        assert!(session.is_loading());
    }

    #[test]
    fn test_resubmit_after_settle() {
        let mut session = session_with_selection();
        let first = session.submit().expect("submit accepted");
        session.settle(first.ticket, Err(PredictError::Timeout(30_000)));
        assert!(session.error().is_some());

        session.apply_preset(DatePreset::Tomorrow, today());
        let second = session.submit().expect("resubmit accepted");
        assert_ne!(second.ticket, first.ticket);
        let request = &second.request;
        assert_eq!((request.year, request.month, request.day), (2024, 3, 11));
        assert_eq!(session.error(), None);
    }

    #[test]
    fn test_invalid_date_settles_without_request() {
        let mut session = session_with_selection();
        session.set_date("");

        assert_eq!(session.submit(), None);
        assert!(!session.is_loading());
        assert_eq!(session.outbound(), None);
        assert!(session.error().unwrap().starts_with("Invalid date"));

        session.set_date("2031-01-01");
        assert_eq!(session.submit(), None);
        assert!(session.error().unwrap().contains("outside"));
    }

    #[test]
    fn test_reset_clears_result_and_search() {
        let mut session = session_with_selection();
        let pending = session.submit().expect("submit accepted");
        session.settle(
            pending.ticket,
            Ok(response(r#"{"predictions": {"ถนน": 2}, "total_predicted": 2}"#)),
        );
        assert!(session.result().is_some());

        session.set_date("2024-04-01");
        session.reset();

        assert_eq!(session.request(), &RequestState::Idle);
        assert_eq!(session.combobox().query(), "");
        assert_eq!(session.combobox().selected(), None);
        assert_eq!(session.date_input(), "2024-04-01");
        assert!(!session.can_submit());
    }

    #[test]
    fn test_late_outcome_after_reset_is_ignored() {
        let mut session = session_with_selection();
        let pending = session.submit().expect("submit accepted");
        session.reset();

        session.settle(
            pending.ticket,
            Ok(response(r#"{"predictions": {"ถนน": 2}, "total_predicted": 2}"#)),
        );
        assert_eq!(session.request(), &RequestState::Idle);
        assert_eq!(session.result(), None);
    }

    #[test]
    fn test_late_outcome_does_not_settle_next_request() {
        let mut session = session_with_selection();
        let first = session.submit().expect("submit accepted");
        session.reset();

        session.apply(ComboboxEvent::Pick("ลาดพร้าว".to_string()));
        let second = session.submit().expect("resubmit accepted");

        // Answer to the dropped request arrives while the new one is in flight
        session.settle(
            first.ticket,
            Ok(response(r#"{"predictions": {"ถนน": 99}, "total_predicted": 99}"#)),
        );
        assert!(session.is_loading());
        assert_eq!(session.result(), None);
        assert_eq!(session.outbound(), Some(&second));

        session.settle(
            second.ticket,
            Ok(response(r#"{"predictions": {"น้ำท่วม": 3}, "total_predicted": 3}"#)),
        );
        let result = session.result().expect("prediction stored");
        assert_eq!(result.subdistrict, "ลาดพร้าว");
        assert_eq!(result.total, 3.0);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_catalog_loads_once() {
        let mut session = PredictorSession::new(today());
        session.load_catalog(LocationCatalog::new(["บางนา"]));
        session.load_catalog(LocationCatalog::new(["ดินแดง", "คลองตัน"]));
        assert_eq!(session.catalog().iter().collect::<Vec<_>>(), vec!["บางนา"]);
    }

    #[test]
    fn test_empty_catalog_still_works() {
        let mut session = PredictorSession::new(today());
        session.load_catalog(LocationCatalog::empty());

        session.apply(ComboboxEvent::Focus);
        session.apply(ComboboxEvent::Key(Key::ArrowDown));
        let outcome = session.apply(ComboboxEvent::Key(Key::Enter));

        assert!(!outcome.prevent_default);
        assert_eq!(session.combobox().selected(), None);

        // A pointer pick still works even without candidates loaded
        session.apply(ComboboxEvent::Pick("บางนา".to_string()));
        assert!(session.can_submit());
    }

    #[test]
    fn test_outside_click_and_clear() {
        let mut session = session_with_selection();
        session.apply(ComboboxEvent::Focus);
        session.apply(ComboboxEvent::Dismiss);
        assert!(!session.combobox().is_open());
        assert_eq!(session.combobox().selected(), Some("วังทองหลาง"));

        session.apply(ComboboxEvent::Clear);
        assert_eq!(session.combobox().query(), "");
        assert!(!session.can_submit());
    }
}
