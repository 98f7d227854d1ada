use cabind_core::GENERATED_BANNER;
use cabind_ir::ClassIR;

mod header;
mod source;

pub use header::NativeHeader;
pub use source::NativeSource;

/// `// GENERATED -- DO NOT EDIT!!`
pub(crate) fn banner() -> String {
    format!("// {}", GENERATED_BANNER)
}

/// Name of the layout stand-in struct of a class.
pub(crate) fn layout_name(class: &ClassIR) -> String {
    format!("_{}", class.c_name)
}
