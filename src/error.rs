#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("CBOR error ({0})")]
    Cbor(#[from] dcbor::Error),

    #[error("hex error ({0})")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid half length: expected 2 bytes, got {0} bytes")]
    InvalidLength(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}

impl From<Error> for dcbor::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Cbor(err) => err,
            _ => dcbor::Error::msg(err),
        }
    }
}
