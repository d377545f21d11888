//! Various utilities functions and types

pub mod printer;
mod seq_buf;

pub use self::printer::{LogPrinter, Printer};
pub use self::seq_buf::SeqBuf;
