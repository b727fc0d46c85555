// Question domain module
// Contains the question record and the validated input used to create one

#![allow(clippy::module_inception)]

pub mod question;
pub mod value_objects;

pub use question::Question;
pub use value_objects::{NewQuestion, ValidationError};
