pub mod assembler;

pub use assembler::SheetAssembler;

#[cfg(test)]
mod assembler_tests;
