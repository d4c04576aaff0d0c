//! Pattern 4: clone as a checked, opt-in capability.
//!
//! Some object systems make cloning an optional capability: a type must
//! opt in, and invoking clone on one that has not signals an unsupported
//! operation at runtime. `TryClone` models that shape so the scenarios
//! can contrast it with the total `ShallowClone`/`DeepClone` traits,
//! where the failure mode cannot exist.

use thiserror::Error;

use crate::library::Library;
use crate::person::Person;
use crate::strategy::DeepClone;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CloneError {
    #[error("clone is not supported for {type_name}")]
    Unsupported { type_name: &'static str },
}

/// The opt-in shape: cloning may be refused at runtime.
pub trait TryClone: Sized {
    fn try_clone(&self) -> Result<Self, CloneError>;
}

impl TryClone for Person {
    fn try_clone(&self) -> Result<Self, CloneError> {
        Ok(self.deep_clone())
    }
}

impl TryClone for Library {
    fn try_clone(&self) -> Result<Self, CloneError> {
        Ok(self.deep_clone())
    }
}

/// A type that never opts in. Trying to clone it is the one failure this
/// crate can produce, and only under the opt-in shape.
#[derive(Debug)]
pub struct SealedHandle {
    label: String,
}

impl SealedHandle {
    pub fn new(label: impl Into<String>) -> Self {
        SealedHandle {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl TryClone for SealedHandle {
    fn try_clone(&self) -> Result<Self, CloneError> {
        Err(CloneError::Unsupported {
            type_name: "SealedHandle",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Address;
    use crate::strategy::{same_instance, share};

    #[test]
    fn entities_always_clone() {
        let person = Person::new("unique", share(Address::new("Punjab")));
        let clone = person.try_clone().unwrap();

        // Opt-in delegates to the deep strategy: no sharing.
        assert!(!same_instance(person.address(), clone.address()));
        assert_eq!(clone.city(), "Punjab");
    }

    #[test]
    fn sealed_handle_refuses() {
        let handle = SealedHandle::new("archive");
        let err = handle.try_clone().unwrap_err();

        assert_eq!(
            err,
            CloneError::Unsupported {
                type_name: "SealedHandle"
            }
        );
        assert_eq!(err.to_string(), "clone is not supported for SealedHandle");
        assert_eq!(handle.label(), "archive");
    }
}
