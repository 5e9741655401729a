use url::form_urlencoded;

/// NavState identifies which view is currently displayed. It is the single source of
/// truth for navigation: decoded from the query string on load, encoded into the
/// history slug on every navigation, and compared to suppress redundant reloads.
///
/// Possible views:
/// * `Index` -> overview of the tracked leagues
/// * `League` -> season list of a league
/// * `Season` -> race list and standings of a season
/// * `Race` -> results and lap chart of a single race
/// * `Driver` -> career overview of a single driver
///
/// A race is only addressable together with its season and league, while a driver view
/// carries no league context at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    Index,
    League { league: u32 },
    Season { league: u32, season: u32 },
    Race { league: u32, season: u32, race: u32 },
    Driver { driver: u32 },
}

/// encode_state returns the query string slug addressing the inserted state. The bare
/// slug "?" stands for the index view.
pub fn encode_state(state: Option<&NavState>) -> String {
    match state {
        None | Some(NavState::Index) => String::from("?"),
        Some(NavState::Driver { driver }) => format!("?d={}", driver),
        Some(NavState::League { league }) => format!("?l={}", league),
        Some(NavState::Season { league, season }) => format!("?l={}&s={}", league, season),
        Some(NavState::Race {
            league,
            season,
            race,
        }) => format!("?l={}&s={}&r={}", league, season, race),
    }
}

/// get_param returns the first occurrence of the inserted query parameter if it parses
/// as an integer. Malformed values count as absent.
fn get_param(query: &str, key: &str) -> Option<u32> {
    let query = query.strip_prefix('?').unwrap_or(query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse().ok())
}

/// decode_state reads the parameters d, l, s and r from the inserted query string and
/// returns the deepest fully-valid view. A driver id takes precedence over all other
/// parameters; below that, a missing or malformed id truncates the state at the
/// previous level.
pub fn decode_state(query: &str) -> NavState {
    if let Some(driver) = get_param(query, "d") {
        return NavState::Driver { driver };
    }

    let league = match get_param(query, "l") {
        Some(league) => league,
        None => return NavState::Index,
    };

    let season = match get_param(query, "s") {
        Some(season) => season,
        None => return NavState::League { league },
    };

    match get_param(query, "r") {
        Some(race) => NavState::Race {
            league,
            season,
            race,
        },
        None => NavState::Season { league, season },
    }
}

/// equal_states checks if two optional states address the same view. No state at all
/// counts as the index view, and states of different depth are never equal.
pub fn equal_states(state1: Option<&NavState>, state2: Option<&NavState>) -> bool {
    state1.unwrap_or(&NavState::Index) == state2.unwrap_or(&NavState::Index)
}

/// The NavTracker keeps the last displayed navigation state to decide if a navigation
/// call or history event actually changes the view. It is owned by the application
/// driver and replaces its state on every accepted transition.
#[derive(Debug)]
pub struct NavTracker {
    cur_state: Option<NavState>,
}

impl NavTracker {
    pub fn new() -> NavTracker {
        NavTracker { cur_state: None }
    }

    /// cur_state returns the currently displayed state, if any view was loaded yet.
    pub fn cur_state(&self) -> Option<&NavState> {
        self.cur_state.as_ref()
    }

    /// navigate records the inserted state as displayed and returns the slug to push
    /// to the history, or None if the view did not change and no history entry must be
    /// created.
    pub fn navigate(&mut self, next: NavState) -> Option<String> {
        if self.cur_state.is_some() && equal_states(self.cur_state.as_ref(), Some(&next)) {
            return None;
        }

        let slug = encode_state(Some(&next));
        self.cur_state = Some(next);
        Some(slug)
    }

    /// on_history_change decodes the inserted query string and returns the state to
    /// load, or None if the event addresses the already displayed view and the reload
    /// can be suppressed. The first event always loads its view.
    pub fn on_history_change(&mut self, query: &str) -> Option<NavState> {
        let next = decode_state(query);

        if self.cur_state.is_some() && equal_states(self.cur_state.as_ref(), Some(&next)) {
            return None;
        }

        self.cur_state = Some(next.clone());
        Some(next)
    }
}
