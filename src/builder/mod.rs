//! Builders for the commands usually filled from a test's service
//! definitions. Every field is optional while building, `try_build` checks
//! that the fields CloudStack requires are present.
pub mod account;
pub mod compute;
pub mod infra;
pub mod network;
pub mod offering;
pub mod storage;

fn required<T>(key: &str, value: Option<T>) -> Result<T, BuilderError> {
    match value {
        Some(value) => Ok(value),
        None => Err(BuilderError::MissingRequiredField(key.to_string())),
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),
}

pub trait Builder<T> {
    fn try_build(self) -> Result<T, BuilderError>;
}

#[cfg(test)]
mod tests {
    use crate::builder::{required, BuilderError};

    #[test]
    fn required_fields() {
        let x = Some(1);
        let y: Option<String> = None;
        assert_eq!(required("x", x), Ok(1));
        assert_eq!(
            required("y", y),
            Err(BuilderError::MissingRequiredField("y".to_string()))
        );
    }

    #[test]
    fn error_names_the_field() {
        let err = BuilderError::MissingRequiredField("zoneid".to_string());
        assert_eq!(err.to_string(), "missing required field `zoneid`");
    }
}
