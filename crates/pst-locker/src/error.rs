use thiserror::Error;

/// Broad outcome class of a [`LockerError`]. Transports map classes, not
/// individual variants, onto their status codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller did not supply a usable session.
    Precondition,
    NotFound,
    /// The operation is not valid in the current state.
    Conflict,
    /// Wrong PIN.
    Forbidden,
}

/// Every way a locker operation can be refused.
///
/// All checks run before any mutation, so an `Err` always means the session
/// is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockerError {
    #[error("X-Seed-Key header is required")]
    MissingSessionKey,
    #[error("no seed found for X-Seed-Key '{0}'; call /seed first")]
    UnknownSession(String),

    #[error("order not found")]
    OrderNotFound,
    #[error("unknown SKU '{0}'")]
    UnknownSku(String),
    #[error("cell not found")]
    CellNotFound,

    #[error("{0}")]
    InvalidState(&'static str),
    #[error("no free cells")]
    NoFreeCells,
    #[error("order has no assigned cell")]
    NoCellAssigned,

    #[error("wrong PIN code")]
    WrongCode,
}

impl LockerError {
    pub fn class(&self) -> ErrorClass {
        match self {
            LockerError::MissingSessionKey | LockerError::UnknownSession(_) => {
                ErrorClass::Precondition
            }
            LockerError::OrderNotFound | LockerError::UnknownSku(_) | LockerError::CellNotFound => {
                ErrorClass::NotFound
            }
            LockerError::InvalidState(_)
            | LockerError::NoFreeCells
            | LockerError::NoCellAssigned => ErrorClass::Conflict,
            LockerError::WrongCode => ErrorClass::Forbidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_the_expected_class() {
        use ErrorClass::*;
        let cases = [
            (LockerError::MissingSessionKey, Precondition),
            (LockerError::UnknownSession("k".into()), Precondition),
            (LockerError::OrderNotFound, NotFound),
            (LockerError::UnknownSku("x".into()), NotFound),
            (LockerError::CellNotFound, NotFound),
            (LockerError::InvalidState("nope"), Conflict),
            (LockerError::NoFreeCells, Conflict),
            (LockerError::NoCellAssigned, Conflict),
            (LockerError::WrongCode, Forbidden),
        ];
        for (err, class) in cases {
            assert_eq!(err.class(), class, "{err:?}");
        }
    }

    #[test]
    fn invalid_state_displays_its_reason() {
        let e = LockerError::InvalidState("order must be CREATED to deposit");
        assert_eq!(e.to_string(), "order must be CREATED to deposit");
    }
}
