use std::io::{BufWriter, Write, stdout};
use std::process::ExitCode;

mod constants;
mod data;
mod error;
mod filters;
mod pager;
mod prompt;
mod report;
mod session;

use session::Session;

fn main() -> ExitCode {
    env_logger::init();

    let stdin = std::io::stdin().lock();
    let mut out = BufWriter::new(stdout());

    let mut session = Session::new(stdin, &mut out);
    let result = session.run();
    drop(session);
    let _ = out.flush();

    if let Err(err) = result {
        log::error!("session aborted: {err}");
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
