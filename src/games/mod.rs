//! Game implementations built on the `RulesEngine` capability set.

pub mod schafkopf;
