pub mod check;
pub mod frames;
pub mod init;
pub mod run;
