/// Name the solver is registered under in issuer configurations.
pub const SOLVER_NAME: &str = "dnspod";

pub const ACTION_PRESENT: &str = "Present";
pub const ACTION_CLEANUP: &str = "CleanUp";
