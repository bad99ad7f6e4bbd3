use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("I/O error reading {path}: {source}"))]
    ReadFile { path: String, source: std::io::Error },

    #[snafu(display("I/O error writing {path}: {source}"))]
    WriteFile { path: String, source: std::io::Error },

    #[snafu(display("invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("{source}"))]
    #[snafu(context(false))]
    Core { source: portfmt_core::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
