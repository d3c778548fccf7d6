use thiserror::Error;

/// Code-generation failures. These abort the whole run: shipping a library
/// with a silently missing icon is worse than failing loudly.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no <svg> root element in downloaded markup for icon '{name}'")]
    MissingSvgRoot { name: String },

    #[error("unterminated <svg> tag in downloaded markup for icon '{name}'")]
    UnterminatedSvgTag { name: String },
}
