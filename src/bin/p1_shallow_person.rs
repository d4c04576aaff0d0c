//! Scenario 1: Shallow Copy
//! Example: Person sharing its Address with a shallow clone
//!
//! Run with: cargo run --bin p1_shallow_person

use clone_patterns::person::{Address, Person};
use clone_patterns::report;
use clone_patterns::strategy::{same_instance, share, ShallowClone};

fn main() {
    report::banner("Shallow Copy: Person and Address");

    let person = Person::new("unique", share(Address::new("Punjab")));

    report::section("initial state");
    report::field("person address", &person.city());
    report::blank();

    let clone = person.shallow_clone();
    clone.set_city("Haryana");

    // The address handle is aliased, so the write above reaches both.
    report::section("after mutating the clone's address");
    report::field("person address", &person.city());
    report::field("clone person address", &clone.city());
    report::blank();

    report::field(
        "same address instance",
        &same_instance(person.address(), clone.address()).to_string(),
    );
}
