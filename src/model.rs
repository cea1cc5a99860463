pub mod choice;
pub mod command;
pub mod message;
pub mod outcome;
pub mod reaction;
