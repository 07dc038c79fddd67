pub mod header;
pub mod proportion_bar;
pub mod range_line;
