// ============================================================================
// TRAVERSAL CONSTANTS
// ============================================================================

/// Maximum nesting depth a traversal descends before giving up, guarding the stack
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Environment variable overriding the maximum depth
pub const MAX_DEPTH_ENV_VAR: &str = "SYB_MAX_DEPTH";

/// Values of [`MAX_DEPTH_ENV_VAR`] that disable the depth limit
pub const UNBOUNDED_DEPTH_VALUES: [&str; 2] = ["none", "unbounded"];
