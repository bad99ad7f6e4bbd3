use snafu::Snafu;

/// The closed set of error kinds shared by every portfmt crate (spec.md §7).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("I/O error: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("invalid regular expression {name}: {source}"))]
    InvalidRegexp { name: &'static str, source: regex::Error },

    #[snafu(display("edit pass {pass} failed: {message}"))]
    EditFailed { pass: String, message: String },

    #[snafu(display("expected {expected:?} at line {line}"))]
    ExpectedChar { expected: char, line: usize },

    #[snafu(display("expected an integer at line {line}"))]
    ExpectedInt { line: usize },

    #[snafu(display("expected a {expected} token at line {line}"))]
    ExpectedToken { expected: &'static str, line: usize },

    #[snafu(display("unspecified tokenizer error at line {line}"))]
    UnspecifiedTokenizer { line: usize },

    #[snafu(display("unhandled token type at line {line}"))]
    UnhandledTokenType { line: usize },

    #[snafu(display("unknown conditional {directive:?} at line {line}"))]
    UnknownConditional { directive: String, line: usize },

    #[snafu(display("unknown target {name:?}"))]
    UnknownTarget { name: String },

    #[snafu(display("unknown variable {name:?}"))]
    UnknownVariable { name: String },

    #[snafu(display("metadata cache entry expired"))]
    ExpiredMetadata,

    #[snafu(display("buffer append failed: {message}"))]
    BufferAppend { message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
