//! Declaration emission
//!
//! An emitter receives one [`ObjectDeclaration`] per configured SObject, in
//! configuration order, bracketed by `begin` and `finish`. The TypeScript
//! emitter buffers the whole module and hands it back only once every object
//! has been written, so a failed run leaves no partial file behind.

pub mod context;
mod error;
mod typescript;

pub use context::{DEFAULT_RUNTIME_MODULE, RUNTIME_IMPORTS, RUNTIME_INTERFACE, SUPER_CLASS};
pub use error::{EmitError, EmitResult};
pub use typescript::TypeScriptEmitter;

use crate::declaration::ObjectDeclaration;
use crate::generate::ClassIndex;

/// Writes the declarations of generated SObject classes
pub trait DeclarationEmitter {
    /// Called once before the first object
    fn begin(&mut self) -> EmitResult<()> {
        Ok(())
    }

    /// Write the contract and class of one SObject
    fn emit_object(&mut self, declaration: &ObjectDeclaration, index: &ClassIndex) -> EmitResult<()>;

    /// Called once after the last object
    fn finish(&mut self) -> EmitResult<()> {
        Ok(())
    }
}

/// Options for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Module the runtime names are imported from
    pub runtime_module: String,
    /// Indent string (default: 4 spaces)
    pub indent: String,
    /// Include the runtime import at the top of the module
    pub include_imports: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            runtime_module: DEFAULT_RUNTIME_MODULE.to_string(),
            indent: "    ".to_string(),
            include_imports: true,
        }
    }
}

impl EmitOptions {
    pub fn with_runtime_module(mut self, module: impl Into<String>) -> Self {
        self.runtime_module = module.into();
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn without_imports(mut self) -> Self {
        self.include_imports = false;
        self
    }
}
