use std::collections::VecDeque;

use adopt_core::{DogDetailsHolder, DogListHolder, Roster};

use super::{BrowseAction, BrowseState, Screen};
use crate::toast::Toast;

/// Owns the state holders and the screen hand-off between them.
///
/// The UI dispatches actions and reads state; every operation is synchronous
/// and in-memory, so the queue is drained in full on each update.
pub struct BrowseManager {
    roster: Roster,
    list: DogListHolder,
    details: DogDetailsHolder,

    // Current flow state - single source of truth
    state: BrowseState,

    // Action queue for sequential processing
    pending_actions: VecDeque<BrowseAction>,
}

impl BrowseManager {
    pub fn new(roster: Roster) -> Self {
        let list = DogListHolder::new(&roster);
        Self {
            roster,
            list,
            details: DogDetailsHolder::new(),
            state: BrowseState::default(),
            pending_actions: VecDeque::new(),
        }
    }

    /// UI calls this - synchronous, just queues the action
    pub fn dispatch(&mut self, action: BrowseAction) {
        log::debug!("Dispatching action: {}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Call this each frame - drains the queue in dispatch order
    pub fn update(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            log::debug!("Processing action: {}", action.description());
            self.handle_action(action);
        }
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn list(&self) -> &DogListHolder {
        &self.list
    }

    pub fn details(&self) -> &DogDetailsHolder {
        &self.details
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    fn handle_action(&mut self, action: BrowseAction) {
        match action {
            BrowseAction::OpenDetails { dog_id } => self.handle_open_details(dog_id),
            BrowseAction::ShowList => self.handle_show_list(),
            BrowseAction::AdoptCurrent => self.handle_adopt_current(),
            BrowseAction::DismissToast => self.state.toast = None,
            BrowseAction::ClearErrors => self.state.clear_errors(),
        }
    }
}

// Action handler implementations
impl BrowseManager {
    fn handle_open_details(&mut self, dog_id: String) {
        self.state.clear_errors();
        self.state.selected_id = Some(dog_id.clone());

        match self.details.init_by_id(&self.roster, &dog_id) {
            Ok(()) => {
                log::info!("Opened details for dog id={}", dog_id);
            }
            Err(error) => {
                // The details screen still opens; it renders a not-found
                // placeholder for an absent record.
                self.state.add_error(error.to_string());
                log::warn!("Details lookup failed: {}", error);
            }
        }

        self.state.screen = Screen::Details;
    }

    fn handle_show_list(&mut self) {
        self.state.screen = Screen::List;
        self.state.toast = None;
        log::info!("Returned to the list");
    }

    fn handle_adopt_current(&mut self) {
        // There is no adoption backend: acknowledge and change nothing.
        self.state.toast = Some(Toast::new("Thanks dude"));
        log::info!(
            "Adoption requested for dog id={}",
            self.state.selected_id.as_deref().unwrap_or("<none>")
        );
    }
}
