pub mod a001_person;
pub mod a002_conversation;
