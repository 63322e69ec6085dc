//! Site components: the particle background, the page shell, and the
//! contact form.

pub mod contact;
pub mod page;
pub mod particle_field;
