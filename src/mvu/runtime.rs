use crate::error::ScorecardError;
use crate::mvu::session::{Msg, SessionModel, run_effect, update};

/// Applies `msg` and drains the resulting effects before returning.
///
/// # Errors
///
/// Returns the failure of the first effect that failed. The model already carries it
/// as a notice, and no further effects are run.
pub fn dispatch(model: &mut SessionModel, msg: Msg) -> Result<(), ScorecardError> {
    let mut effects = update(model, msg);
    while let Some(effect) = effects.pop() {
        tracing::debug!(mvu = "effect_start", effect = ?effect);
        let msg = run_effect(effect, model);
        tracing::debug!(mvu = "effect_done", msg = ?msg);
        match msg {
            Msg::Failed(e) => {
                update(model, Msg::Failed(e.clone()));
                tracing::warn!(error = %e, "session effect failed");
                return Err(e);
            }
            other => {
                let next = update(model, other);
                tracing::debug!(mvu = "update", queued_effects = next.len());
                effects.extend(next);
            }
        }
    }
    Ok(())
}
