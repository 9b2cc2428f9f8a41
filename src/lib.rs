pub mod config;
pub mod input;
pub mod overlay;
pub mod page;
pub mod sim;
pub mod trace;

#[cfg(test)]
mod test;
