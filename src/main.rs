use std::process::ExitCode;

fn main() -> ExitCode {
    portfmt_cli::run()
}
