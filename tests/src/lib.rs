//! Integration tests driving the core crate over real sockets and a real
//! data directory.

#[cfg(test)]
mod utils;

#[cfg(test)]
mod cart;
#[cfg(test)]
mod catalog;
#[cfg(test)]
mod session;
