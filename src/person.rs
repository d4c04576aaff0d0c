//! Pattern 3a: a root entity owning a single leaf.
//!
//! `Person` holds a name by value and an `Address` behind a shared
//! handle. The shallow clone aliases the address; the deep clone
//! rebuilds it. Each field's strategy is spelled at the field site.

use std::fmt;

use crate::strategy::{alias, reconstruct, DeepClone, ShallowClone, Shared};

/// Leaf entity: only primitive fields, no outgoing references.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    city: String,
}

impl Address {
    pub fn new(city: impl Into<String>) -> Self {
        Address { city: city.into() }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }
}

/// Root entity: one primitive field plus one owned leaf handle.
#[derive(Debug)]
pub struct Person {
    name: String,
    address: Shared<Address>,
}

impl Person {
    pub fn new(name: impl Into<String>, address: Shared<Address>) -> Self {
        Person {
            name: name.into(),
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn address(&self) -> &Shared<Address> {
        &self.address
    }

    /// Copies the city out; the borrow ends before this returns.
    pub fn city(&self) -> String {
        self.address.borrow().city().to_string()
    }

    pub fn set_city(&self, city: impl Into<String>) {
        self.address.borrow_mut().set_city(city);
    }
}

impl ShallowClone for Person {
    fn shallow_clone(&self) -> Self {
        Person {
            name: self.name.clone(),       // duplicate
            address: alias(&self.address), // same allocation
        }
    }
}

impl DeepClone for Person {
    fn deep_clone(&self) -> Self {
        Person {
            name: self.name.clone(),             // duplicate
            address: reconstruct(&self.address), // fresh allocation
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "person: {}", self.name)?;
        write!(f, "address: {}", self.address.borrow().city())
    }
}
