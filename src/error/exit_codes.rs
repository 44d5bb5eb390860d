use crate::error::EnvProbeError;

pub fn get_exit_code(error: &EnvProbeError) -> i32 {
    match error {
        // EX_SOFTWARE: an invariant violation, not an environment problem
        EnvProbeError::Internal(_) => 70,

        _ => 1,
    }
}
