/// Decimal places kept on scaled quantities and costs.
pub const SCALE_DECIMALS: u32 = 2;

/// Guest count offered when none is given.
pub const DEFAULT_GUEST_COUNT: u32 = 50;

/// Portion size of a freshly drafted recipe.
pub const DEFAULT_PORTION_SIZE: u32 = 10;

/// Smallest party a client may request through the portal.
pub const MIN_RESERVATION_GUESTS: u32 = 10;

/// Reservations listed on the administrator dashboard.
pub const RECENT_RESERVATIONS: usize = 3;

/// Workspace snapshot used when `--file` is not given.
pub const DEFAULT_WORKSPACE_FILE: &str = "catering_workspace.json";

// ─────────────────────────────────────────────────────────────────────────────
// Recipe drafting
// ─────────────────────────────────────────────────────────────────────────────

/// Unit given to placeholder ingredients.
pub const PLACEHOLDER_UNIT: &str = "unit";

/// Cost of a placeholder ingredient, in cents.
pub const PLACEHOLDER_COST_CENTS: i64 = 150;

// ─────────────────────────────────────────────────────────────────────────────
// Name matching
// ─────────────────────────────────────────────────────────────────────────────

/// Jaro-Winkler score a candidate must exceed to be offered as a match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum candidates shown in a selection prompt.
pub const FUZZY_MAX_CANDIDATES: usize = 5;
