pub mod check;
pub mod compile;
pub mod cycles;
pub mod dump;
pub mod graph_loader;

#[cfg(test)]
mod graph_loader_tests;
#[cfg(test)]
mod cycles_tests;
