//! Participant filter engine.
//!
//! Filtering is visual, not a data deletion: every event stays in the
//! dataset and the filter only decides whether it renders at full weight or
//! de-emphasized. The weight is recomputed on every render pass, never
//! cached per event, because the filter selection can change without a data
//! refresh.

use chrono::NaiveDate;
use shared::{DisplayEvent, FilterSelection, VisibilityWeight};

/// Compute the rendering weight of one event under the current filters.
///
/// An event is dimmed when a patient filter is set and does not include its
/// patient, or a doctor filter is set and does not include its doctor.
pub fn visibility_weight(event: &DisplayEvent, filters: &FilterSelection) -> VisibilityWeight {
    let patient_excluded =
        !filters.patient_ids.is_empty() && !filters.patient_ids.contains(&event.patient_id);
    let doctor_excluded =
        !filters.doctor_ids.is_empty() && !filters.doctor_ids.contains(&event.doctor_id);

    if patient_excluded || doctor_excluded {
        VisibilityWeight::Dimmed
    } else {
        VisibilityWeight::Full
    }
}

/// Count the events on `day` that render at full weight. Dimmed events are
/// excluded from the count but remain in the underlying dataset.
pub fn visible_count_for_day(
    events: &[DisplayEvent],
    filters: &FilterSelection,
    day: NaiveDate,
) -> usize {
    events
        .iter()
        .filter(|event| event.calendar_date == day)
        .filter(|event| visibility_weight(event, filters) == VisibilityWeight::Full)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_event(id: i64, day: u32, patient_id: &str, doctor_id: &str) -> DisplayEvent {
        let start = NaiveDate::from_ymd_opt(2025, 4, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        DisplayEvent {
            id,
            resource_id: Some("3".to_string()),
            start,
            calendar_date: start.date(),
            patient_id: patient_id.to_string(),
            doctor_id: doctor_id.to_string(),
            patient_name: patient_id.to_string(),
            doctor_name: doctor_id.to_string(),
            urgency: 1,
            room_number: 3,
        }
    }

    #[test]
    fn test_empty_filters_mean_full_weight() {
        let event = test_event(1, 15, "P1", "D1");
        let filters = FilterSelection::default();

        assert_eq!(visibility_weight(&event, &filters), VisibilityWeight::Full);
    }

    #[test]
    fn test_event_outside_patient_filter_is_dimmed() {
        let event = test_event(1, 15, "P2", "D1");
        let mut filters = FilterSelection::default();
        filters.patient_ids.insert("P1".to_string());

        assert_eq!(visibility_weight(&event, &filters), VisibilityWeight::Dimmed);
    }

    #[test]
    fn test_event_matching_both_filters_is_full() {
        let event = test_event(1, 15, "P1", "D1");
        let mut filters = FilterSelection::default();
        filters.patient_ids.insert("P1".to_string());
        filters.doctor_ids.insert("D1".to_string());

        assert_eq!(visibility_weight(&event, &filters), VisibilityWeight::Full);
    }

    #[test]
    fn test_doctor_filter_dims_even_when_patient_matches() {
        let event = test_event(1, 15, "P1", "D2");
        let mut filters = FilterSelection::default();
        filters.patient_ids.insert("P1".to_string());
        filters.doctor_ids.insert("D1".to_string());

        assert_eq!(visibility_weight(&event, &filters), VisibilityWeight::Dimmed);
    }

    #[test]
    fn test_visible_count_excludes_dimmed_but_keeps_dataset_intact() {
        let events = vec![
            test_event(1, 15, "P1", "D1"),
            test_event(2, 15, "P2", "D1"),
            test_event(3, 16, "P1", "D1"),
        ];
        let day = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();

        let no_filters = FilterSelection::default();
        assert_eq!(visible_count_for_day(&events, &no_filters, day), 2);

        let mut filters = FilterSelection::default();
        filters.patient_ids.insert("P1".to_string());
        assert_eq!(visible_count_for_day(&events, &filters, day), 1);

        // A filter excluding every doctor drives the count to zero without
        // removing any events.
        let mut exclude_all = FilterSelection::default();
        exclude_all.doctor_ids.insert("D9".to_string());
        assert_eq!(visible_count_for_day(&events, &exclude_all, day), 0);
        assert_eq!(events.len(), 3);
    }
}
