//! Request/response processing and authentication guards.

pub mod auth;

#[cfg(test)]
mod test;
