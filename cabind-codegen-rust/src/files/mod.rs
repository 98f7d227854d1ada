use cabind_core::GENERATED_BANNER;
use cabind_ir::{AbiFunction, AbiOp, BindingIR};

mod containers;
mod glue;

pub use containers::ContainerWrapper;
pub use glue::ForeignGlue;

/// `// GENERATED -- DO NOT EDIT!!`
pub(crate) fn banner() -> String {
    format!("// {}", GENERATED_BANNER)
}

/// `use super::ffi::*;`
pub(crate) fn use_raw(ir: &BindingIR) -> String {
    format!("use super::{}::*;", ir.meta.raw_module)
}

/// Symbol of the function performing `op`, if the class exports one.
pub(crate) fn symbol<'a>(abi: &'a [AbiFunction], op: &AbiOp) -> Option<&'a str> {
    abi.iter()
        .find(|f| &f.op == op)
        .map(|f| f.symbol.as_str())
}
