pub mod page;
pub mod pointer;
