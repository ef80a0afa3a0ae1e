//! Solver configuration.

/// Configurable parameters used during solving.
pub struct SolverConfig {
    /// Multiplicative decay for the VSIDS decision heuristic.
    pub vsids_decay: f32,

    /// Multiplicative decay for clause activities.
    pub clause_activity_decay: f32,

    /// Number of conflicts between local clause reductions.
    pub reduce_locals_interval: u64,

    /// Number of conflicts between mid clause reductions.
    pub reduce_mids_interval: u64,

    /// Scaling factor for luby sequence based restarts (number of conflicts).
    pub luby_restart_interval_scale: u64,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            vsids_decay: 0.95,
            clause_activity_decay: 0.999,
            reduce_locals_interval: 15000,
            reduce_mids_interval: 10000,
            luby_restart_interval_scale: 128,
        }
    }
}
