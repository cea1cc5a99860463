pub mod context;
pub mod error;
pub mod listener;
pub mod model;
pub mod session;
pub mod use_case;

#[cfg(test)]
mod test;
