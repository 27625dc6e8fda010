mod exit;
mod io_pump;
mod printer;
mod session;
mod traits;
pub mod types;

mod run;

pub use exit::{normalize_exit, UNKNOWN_EXIT_CODE};
pub use io_pump::{pump_stderr, pump_stdout};
pub use printer::spawn_printer;
pub use run::{run_command, run_session, DynWriter, RunSessionArgs};
pub use session::ProcessSession;
pub use traits::RunnerSession;
pub use types::{LineStream, LineTap, RunOutcome, RunnerResult, RunnerStartArgs};
