//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Marker-Erfassung ===
            AppCommand::SelectCategory { category } => {
                handlers::session::select_category(state, category)
            }
            AppCommand::EditDescription { text } => handlers::session::edit_description(state, text),
            AppCommand::CommitMarker { position } => {
                handlers::session::commit_marker(state, position)
            }
            AppCommand::CancelCreation => handlers::session::cancel(state),

            // === Geräteposition ===
            AppCommand::SetLocation { position } => handlers::location::set_location(state, position),
            AppCommand::SetLocationError { error } => {
                handlers::location::set_location_error(state, error)
            }

            // === Fotos ===
            AppCommand::SetPhotoFiles { paths } => handlers::upload::set_photo_files(state, paths),
            AppCommand::UploadPhotos => handlers::upload::upload_photos(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
