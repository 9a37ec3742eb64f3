pub mod explorer;

use tansaku_api::traits::Anime;

/// Actions a screen hands back to the app router.
///
/// Screens never build async tasks themselves — they describe the
/// side-effect and the router interprets it in one place, which keeps
/// the screen state machines testable without a network.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No side-effect.
    None,
    /// Start the search quiescence timer for this generation.
    Debounce { generation: u64 },
    /// Issue a suggestion search for `query`, fenced by `seq`.
    Search { seq: u64, query: String },
    /// Fetch one catalog page backing a random pick.
    FetchRandom { page: u32, per_page: u32 },
    /// Open the detail modal for a record.
    ShowDetail(Box<Anime>),
}

/// What kind of modal is currently shown.
#[derive(Debug, Clone)]
pub enum ModalKind {
    Detail(Box<Anime>),
}
