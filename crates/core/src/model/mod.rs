pub mod contact;
pub mod policy;

pub use contact::{Contact, ContactList};
pub use policy::Policy;
