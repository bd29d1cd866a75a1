#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(name: &str) -> Result<()> {
        bail!("visit {name} is gone")
    }

    #[test]
    fn bail_returns_server_error() {
        let err = missing("01J0").unwrap_err();
        assert!(matches!(err, Error::Server(_)));
        assert_eq!(err.to_string(), "visit 01J0 is gone");
    }

    #[test]
    fn anyhow_errors_are_unknown() {
        let err: Error = anyhow::anyhow!("boom").into();
        assert!(matches!(err, Error::Unknown(_)));
    }
}
