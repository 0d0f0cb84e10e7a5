pub mod advice;
pub mod crop;
pub mod expense;
pub mod farm;
pub mod growth;
pub mod market;
pub mod weather;

pub use advice::*;
pub use crop::*;
pub use expense::*;
pub use farm::*;
pub use growth::*;
pub use market::*;
pub use weather::*;
