pub mod forms;
pub mod pointer;
pub mod scroll;
