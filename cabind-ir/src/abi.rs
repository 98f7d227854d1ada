//! C-ABI surface derivation.
//!
//! Every artifact asks [`ClassIR::abi`] which functions a class exposes
//! rather than re-deriving it from the lifecycle flags.

use serde::Serialize;

use crate::{ClassIR, MethodIR};

/// What a C-ABI function does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", content = "method", rename_all = "lowercase")]
pub enum AbiOp {
    Init,
    New,
    Destroy,
    Clone,
    Assign,
    Move,
    Equals,
    Cmp,
    Method(String),
}

impl AbiOp {
    /// Symbol suffix after `{prefix}_{class}_`.
    pub fn suffix(&self) -> &str {
        match self {
            AbiOp::Init => "init",
            AbiOp::New => "new",
            AbiOp::Destroy => "destroy",
            AbiOp::Clone => "clone",
            AbiOp::Assign => "assign",
            AbiOp::Move => "move",
            AbiOp::Equals => "equals",
            AbiOp::Cmp => "cmp",
            AbiOp::Method(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbiParam {
    pub name: String,
    /// Native spelling of the parameter type.
    pub ty: String,
    /// True for the implicit object pointer.
    pub is_receiver: bool,
}

impl AbiParam {
    fn receiver(name: &str, ty: String) -> Self {
        Self {
            name: name.to_string(),
            ty,
            is_receiver: true,
        }
    }

    fn plain(name: &str, ty: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            is_receiver: false,
        }
    }
}

/// One exported C function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbiFunction {
    pub op: AbiOp,
    pub symbol: String,
    /// Native return type; `None` for `void`.
    pub return_type: Option<String>,
    pub params: Vec<AbiParam>,
}

impl AbiFunction {
    /// The C return type, `void` when nothing is returned.
    pub fn c_return(&self) -> &str {
        self.return_type.as_deref().unwrap_or("void")
    }

    /// Render the C prototype without a trailing semicolon.
    pub fn prototype(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect();
        format!("{} {}({})", self.c_return(), self.symbol, params.join(", "))
    }

    /// The method this function wraps, if any.
    pub fn method_name(&self) -> Option<&str> {
        match &self.op {
            AbiOp::Method(name) => Some(name),
            _ => None,
        }
    }
}

impl ClassIR {
    /// Derive the exported C functions for this class, in emission order.
    pub fn abi(&self, prefix: &str) -> Vec<AbiFunction> {
        let name = self.c_name.as_str();
        let mut_ptr = || format!("{name}*");
        let const_ptr = || format!("{name} const*");
        let func = |op: AbiOp, return_type: Option<String>, params: Vec<AbiParam>| AbiFunction {
            symbol: format!("{prefix}_{name}_{}", op.suffix()),
            op,
            return_type,
            params,
        };

        let mut out = Vec::new();

        if self.managed_object {
            if self.managed_object_default_ctor {
                out.push(func(AbiOp::New, Some(mut_ptr()), vec![]));
            }
        } else if self.default_ctor.is_generated() {
            out.push(func(
                AbiOp::Init,
                None,
                vec![AbiParam::receiver("self", mut_ptr())],
            ));
        }

        if self.generate_dtor {
            out.push(func(
                AbiOp::Destroy,
                None,
                vec![AbiParam::receiver("self", mut_ptr())],
            ));
        }

        if self.copy_ctor.is_generated() {
            out.push(func(
                AbiOp::Clone,
                None,
                vec![
                    AbiParam::receiver("self", const_ptr()),
                    AbiParam::receiver("new_", mut_ptr()),
                ],
            ));
        }

        if self.copy_assign.is_generated() {
            out.push(func(
                AbiOp::Assign,
                None,
                vec![
                    AbiParam::receiver("self", mut_ptr()),
                    AbiParam::receiver("other", const_ptr()),
                ],
            ));
        }

        if self.movable {
            out.push(func(
                AbiOp::Move,
                None,
                vec![
                    AbiParam::receiver("self", mut_ptr()),
                    AbiParam::receiver("dest", mut_ptr()),
                ],
            ));
        }

        if self.eq {
            out.push(func(
                AbiOp::Equals,
                Some("bool".to_string()),
                vec![
                    AbiParam::receiver("self", const_ptr()),
                    AbiParam::receiver("other", const_ptr()),
                ],
            ));
        }

        if self.ord {
            out.push(func(
                AbiOp::Cmp,
                Some("signed char".to_string()),
                vec![
                    AbiParam::receiver("self", const_ptr()),
                    AbiParam::receiver("other", const_ptr()),
                ],
            ));
        }

        for method in &self.methods {
            out.push(func(
                AbiOp::Method(method.name.clone()),
                method.return_type.clone(),
                method_params(self, method),
            ));
        }

        out
    }
}

fn method_params(class: &ClassIR, method: &MethodIR) -> Vec<AbiParam> {
    let mut params = Vec::with_capacity(method.params.len() + 1);
    if !method.is_static {
        let ty = if method.is_const {
            format!("{} const*", class.c_name)
        } else {
            format!("{}*", class.c_name)
        };
        params.push(AbiParam::receiver("self", ty));
    }
    params.extend(method.params.iter().map(|p| AbiParam::plain(&p.name, &p.ty)));
    params
}
