pub mod inoutput;
pub mod input;
pub mod output;
