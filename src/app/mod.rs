// Presentation layer: text screens driven by line commands.

pub mod shell;
