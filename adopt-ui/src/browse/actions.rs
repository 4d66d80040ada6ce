/// User-driven transitions for the two-screen browse flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// Card tap on the list screen: hand this identifier to the details
    /// screen and switch to it.
    OpenDetails { dog_id: String },

    /// Back to the list (back button or Escape).
    ShowList,

    /// "Adopt me !" on the details screen. Raises an acknowledgment toast
    /// and changes nothing else.
    AdoptCurrent,

    DismissToast,
    ClearErrors,
}

impl BrowseAction {
    pub fn description(&self) -> &'static str {
        match self {
            BrowseAction::OpenDetails { .. } => "Opening dog details",
            BrowseAction::ShowList => "Returning to the list",
            BrowseAction::AdoptCurrent => "Adopting the displayed dog",
            BrowseAction::DismissToast => "Dismissing acknowledgment",
            BrowseAction::ClearErrors => "Clearing errors",
        }
    }
}
