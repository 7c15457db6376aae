use std::process::ExitCode;

fn main() -> ExitCode {
    hexdup::app::run(std::env::args_os())
}
