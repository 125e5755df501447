pub mod runtime;
pub mod session;

pub use runtime::dispatch;
pub use session::{Effect, ExportFormat, Msg, Notice, Phase, SessionModel, run_effect, update};
