//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Hier sitzen die Guards des Erfassungsprotokolls: Eingaben, die laut
/// Zustand wirkungslos bleiben müssen (Karten-Klick ohne Kategorie,
/// "an meiner Position" ohne aufgelöste Position), erzeugen keine
/// Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CategorySelected { category } => {
            vec![AppCommand::SelectCategory { category }]
        }
        AppIntent::DescriptionEdited { text } => vec![AppCommand::EditDescription { text }],
        AppIntent::MapClicked { position } => {
            if state.session.is_idle() {
                // Klick ohne gewählte Kategorie bleibt wirkungslos
                Vec::new()
            } else {
                vec![AppCommand::CommitMarker { position }]
            }
        }
        AppIntent::MarkerIconClicked { marker_id } => match state.store.get(marker_id) {
            Some(marker) => vec![AppCommand::SelectCategory {
                category: Some(marker.category),
            }],
            None => Vec::new(),
        },
        AppIntent::AddAtCurrentLocationRequested => {
            // Pending/fehlgeschlagene Position ist "noch nicht nutzbar";
            // es wird keine Ersatzkoordinate eingesetzt.
            match (state.location.position(), state.session.is_idle()) {
                (Some(position), false) => vec![AppCommand::CommitMarker { position }],
                _ => Vec::new(),
            }
        }
        AppIntent::CreationCancelled => vec![AppCommand::CancelCreation],
        AppIntent::LocationResolved { position } => vec![AppCommand::SetLocation { position }],
        AppIntent::LocationFailed { error } => vec![AppCommand::SetLocationError { error }],
        AppIntent::PhotoFilesSelected { paths } => vec![AppCommand::SetPhotoFiles { paths }],
        AppIntent::UploadPhotosRequested => vec![AppCommand::UploadPhotos],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoPoint, IssueCategory};
    use crate::location::{GeoLocationError, LocationState};

    #[test]
    fn test_map_click_without_category_yields_no_commands() {
        let state = AppState::new();
        let commands = map_intent_to_commands(
            &state,
            AppIntent::MapClicked {
                position: GeoPoint::new(50.0, 6.0),
            },
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_map_click_with_category_yields_commit() {
        let mut state = AppState::new();
        state.session.select_category(Some(IssueCategory::Road));

        let commands = map_intent_to_commands(
            &state,
            AppIntent::MapClicked {
                position: GeoPoint::new(50.0, 6.0),
            },
        );
        assert_eq!(
            commands,
            [AppCommand::CommitMarker {
                position: GeoPoint::new(50.0, 6.0)
            }]
        );
    }

    #[test]
    fn test_add_at_location_requires_resolved_position_and_category() {
        let mut state = AppState::new();
        state.session.select_category(Some(IssueCategory::Light));

        // Position noch pending
        assert!(map_intent_to_commands(&state, AppIntent::AddAtCurrentLocationRequested).is_empty());

        // Position fehlgeschlagen
        state.location = LocationState::Failed(GeoLocationError::from_code(3, "timeout"));
        assert!(map_intent_to_commands(&state, AppIntent::AddAtCurrentLocationRequested).is_empty());

        // Position aufgelöst, aber keine Kategorie
        state.location = LocationState::Resolved(GeoPoint::new(50.775, 6.083));
        state.session.select_category(None);
        assert!(map_intent_to_commands(&state, AppIntent::AddAtCurrentLocationRequested).is_empty());

        // Beides vorhanden
        state.session.select_category(Some(IssueCategory::Light));
        let commands = map_intent_to_commands(&state, AppIntent::AddAtCurrentLocationRequested);
        assert_eq!(
            commands,
            [AppCommand::CommitMarker {
                position: GeoPoint::new(50.775, 6.083)
            }]
        );
    }

    #[test]
    fn test_marker_icon_click_selects_marker_category() {
        let mut state = AppState::new();
        let id = state
            .store
            .append(GeoPoint::new(1.0, 1.0), IssueCategory::Float, "nass".into())
            .id;

        let commands = map_intent_to_commands(&state, AppIntent::MarkerIconClicked { marker_id: id });
        assert_eq!(
            commands,
            [AppCommand::SelectCategory {
                category: Some(IssueCategory::Float)
            }]
        );

        // Unbekannte Marker-ID bleibt wirkungslos
        assert!(
            map_intent_to_commands(&state, AppIntent::MarkerIconClicked { marker_id: 999 })
                .is_empty()
        );
    }
}
