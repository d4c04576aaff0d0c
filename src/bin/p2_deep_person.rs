//! Scenario 2: Deep Copy
//! Example: Person rebuilding its Address for a deep clone
//!
//! Run with: cargo run --bin p2_deep_person

use clone_patterns::fallible::{SealedHandle, TryClone};
use clone_patterns::person::{Address, Person};
use clone_patterns::report;
use clone_patterns::strategy::{same_instance, share, DeepClone};

fn main() {
    report::banner("Deep Copy: Person and Address");

    let person = Person::new("Unique", share(Address::new("Punjab")));

    report::section("initial state");
    report::field("person city", &person.city());
    report::blank();

    let clone = person.deep_clone();
    clone.set_city("Haryana");

    // The clone carries its own address, so the original keeps its city.
    report::section("after mutating the clone's address");
    report::field("person city", &person.city());
    report::field("cloned person city", &clone.city());
    report::blank();

    report::field(
        "same address instance",
        &same_instance(person.address(), clone.address()).to_string(),
    );
    report::blank();

    // Contrast: when cloning is an opt-in capability instead of a total
    // operation, a type that never opted in fails at runtime.
    report::section("checked clone capability");
    match person.try_clone() {
        Ok(copy) => report::field("person clones", &copy.city()),
        Err(err) => report::field("person clones", &err.to_string()),
    }
    match SealedHandle::new("archive").try_clone() {
        Ok(copy) => report::field("sealed handle clones", copy.label()),
        Err(err) => report::field("sealed handle clones", &err.to_string()),
    }
}
