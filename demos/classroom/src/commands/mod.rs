pub mod remote;
pub mod serve;
